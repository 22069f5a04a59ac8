use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Request to file a new complaint.
///
/// Status, reference, filing date and filer snapshot are never taken from the
/// caller; intake derives them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewComplaint {
    #[serde(rename = "type")]
    #[validate(range(min = 0))]
    pub complaint_type: i32,

    #[validate(range(min = 0))]
    pub category: i32,

    #[validate(length(min = 1, max = 200))]
    pub subject: String,

    #[validate(length(min = 1, max = 5000))]
    pub description: String,

    #[validate(length(max = 200))]
    pub location: String,
}

/// Status change or response edit requested on an existing complaint.
///
/// # Documentation
/// - `status: None` keeps the current status, so the update only rewrites
///   `response`/`department`.
/// - The acting employee is never part of the payload; callers pass the
///   authenticated identity next to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintUpdate {
    pub id: Uuid,

    #[validate(range(min = 0, max = 3))]
    pub status: Option<i32>,

    #[validate(length(max = 5000))]
    pub response: Option<String>,

    #[validate(length(max = 100))]
    pub department: Option<String>,
}

impl ComplaintUpdate {
    pub fn new(id: Uuid, status: Option<i32>) -> Self {
        Self {
            id,
            status,
            response: None,
            department: None,
        }
    }

    pub fn with_response(mut self, response: &str) -> Self {
        self.response = Some(response.to_string());
        self
    }

    pub fn with_department(mut self, department: &str) -> Self {
        self.department = Some(department.to_string());
        self
    }
}
