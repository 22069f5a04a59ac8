use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::UserModel;

/// # Documentation
/// Point-in-time copy of a person's identity embedded in a complaint.
/// Later edits to the live user record do not reach the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    pub id: Uuid,
    pub name: HeaplessString<100>,
    pub lastname: HeaplessString<100>,
    pub email: HeaplessString<254>,
}

impl ProfileSnapshot {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.lastname)
    }
}

impl From<&UserModel> for ProfileSnapshot {
    fn from(user: &UserModel) -> Self {
        Self {
            id: user.id,
            name: user.first_name.clone(),
            lastname: user.last_name.clone(),
            email: user.email.clone(),
        }
    }
}
