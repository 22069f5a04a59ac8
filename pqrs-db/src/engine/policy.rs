use serde::{Deserialize, Serialize};

use super::EXPIRATION_DAYS;

/// Service-level thresholds applied by the engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SlaPolicy {
    /// Days after filing before an unanswered complaint is overdue
    pub expiration_days: i64,
    /// Remaining SLA days at or below which an open complaint is near expiration
    pub near_expiration_days: i64,
    /// Resolution time, in days, that still counts as satisfactory
    pub satisfaction_days: i64,
    /// Length of the employee leaderboard
    pub top_employees: usize,
}

impl Default for SlaPolicy {
    fn default() -> Self {
        Self {
            expiration_days: EXPIRATION_DAYS,
            near_expiration_days: 3,
            satisfaction_days: 15,
            top_employees: 10,
        }
    }
}
