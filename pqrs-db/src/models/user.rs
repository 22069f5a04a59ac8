use heapless::String as HeaplessString;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use uuid::Uuid;

use super::identifiable::Identifiable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    User,
    Employee,
    Administrator,
}

impl FromStr for UserRole {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "User" => Ok(UserRole::User),
            "Employee" => Ok(UserRole::Employee),
            "Administrator" => Ok(UserRole::Administrator),
            _ => Err(()),
        }
    }
}

impl From<UserRole> for &str {
    fn from(val: UserRole) -> Self {
        match val {
            UserRole::User => "User",
            UserRole::Employee => "Employee",
            UserRole::Administrator => "Administrator",
        }
    }
}

pub fn serialize_user_role<S>(value: &UserRole, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str((*value).into())
}

pub fn deserialize_user_role<'de, D>(deserializer: D) -> Result<UserRole, D::Error>
where
    D: Deserializer<'de>,
{
    let value_str = String::deserialize(deserializer)?;
    UserRole::from_str(&value_str)
        .map_err(|_| serde::de::Error::custom(format!("Invalid UserRole: {value_str}")))
}

/// # Documentation
/// Live identity record of a filer or an employee.
/// - Resolved by email for the acting identity of every service call.
/// - Complaints never reference it directly for display; they embed a
///   [`ProfileSnapshot`](super::profile::ProfileSnapshot) instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserModel {
    pub id: Uuid,
    pub first_name: HeaplessString<100>,
    pub last_name: HeaplessString<100>,
    pub email: HeaplessString<254>,
    #[serde(
        serialize_with = "serialize_user_role",
        deserialize_with = "deserialize_user_role"
    )]
    pub role: UserRole,
}

impl Identifiable for UserModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
