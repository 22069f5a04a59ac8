use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};

/// Label of the trace appended when a complaint is filed
pub const FILED_TRACE_LABEL: &str = "PQRS Radicada";

/// # Documentation
/// One entry of a complaint's audit trail.
/// - `status` is a human-readable action label, not a status code.
/// - `performed_by` is the email of the acting filer or employee.
/// - Entries are immutable once appended; the trail is ordered oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceModel {
    pub date: DateTime<Utc>,
    pub status: String,
    pub performed_by: HeaplessString<254>,
}

impl TraceModel {
    pub fn new(date: DateTime<Utc>, status: impl Into<String>, performed_by: &HeaplessString<254>) -> Self {
        Self {
            date,
            status: status.into(),
            performed_by: performed_by.clone(),
        }
    }
}
