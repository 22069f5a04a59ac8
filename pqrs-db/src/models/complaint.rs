use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::codes::{
    deserialize_complaint_status, serialize_complaint_status, ComplaintCategory, ComplaintStatus,
    ComplaintType,
};
use super::identifiable::Identifiable;
use super::profile::ProfileSnapshot;
use super::trace::TraceModel;

/// Sentinel prediction stored when the classifier is unavailable
pub const UNKNOWN_PREDICTION: &str = "Desconocido";

/// # Documentation
/// A filed PQRS complaint.
///
/// Immutable after filing: `id`, `reference`, `received_date`, `subject`,
/// `description`, `location`, `user` and `user_profile`.
///
/// Response block: `employee`, `employee_profile`, `response`, `response_date`,
/// `department`, `days_to_resolve` and `days_from_expiration` are all `Some`
/// only while the status is resolved or closed. The transition engine keeps
/// this block consistent; storage does not enforce it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintModel {
    pub id: Uuid,

    /// `TRC-<YYYYMMDD>-<6 alphanumeric>-<type>`
    pub reference: HeaplessString<32>,

    pub received_date: DateTime<Utc>,

    #[serde(rename = "type")]
    pub complaint_type: i32,

    pub category: i32,

    #[serde(
        serialize_with = "serialize_complaint_status",
        deserialize_with = "deserialize_complaint_status"
    )]
    pub status: ComplaintStatus,

    pub subject: String,
    pub description: String,
    pub location: String,

    /// Filer id and the snapshot taken at filing time
    pub user: Uuid,
    pub user_profile: ProfileSnapshot,

    pub employee: Option<Uuid>,
    pub employee_profile: Option<ProfileSnapshot>,
    pub response: Option<String>,
    pub response_date: Option<DateTime<Utc>>,
    pub department: Option<String>,

    /// Whole days between filing and response
    pub days_to_resolve: Option<i64>,

    /// SLA days left at resolution time, negative when resolved late
    pub days_from_expiration: Option<i64>,

    pub traceability: Vec<TraceModel>,

    pub prediction: String,

    pub updated_date: Option<DateTime<Utc>>,
}

impl ComplaintModel {
    pub fn complaint_type(&self) -> ComplaintType {
        ComplaintType::from_code(self.complaint_type)
    }

    pub fn category(&self) -> ComplaintCategory {
        ComplaintCategory::from_code(self.category)
    }

    pub fn is_resolved(&self) -> bool {
        self.status.is_resolved()
    }

    /// Whether the response block is either fully populated or fully empty
    /// in agreement with the status.
    pub fn response_block_consistent(&self) -> bool {
        let populated = [
            self.employee.is_some(),
            self.employee_profile.is_some(),
            self.response.is_some(),
            self.response_date.is_some(),
            self.days_to_resolve.is_some(),
            self.days_from_expiration.is_some(),
        ];
        if self.is_resolved() {
            populated.iter().all(|p| *p)
        } else {
            populated.iter().all(|p| !*p) && self.department.is_none()
        }
    }

    pub fn last_trace(&self) -> Option<&TraceModel> {
        self.traceability.last()
    }
}

impl Identifiable for ComplaintModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
