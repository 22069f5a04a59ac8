use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// # Documentation
/// Read-only snapshot computed from the complaints supplied to one
/// statistics call. Never persisted.
///
/// Resolution-time fields default to zero when no complaint is resolved.
/// Rates are percentages rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsReport {
    pub total_pqrs: u64,
    pub open_pqrs: u64,
    pub in_progress_pqrs: u64,
    pub closed_pqrs: u64,

    pub pqrs_by_status: BTreeMap<String, u64>,
    pub pqrs_by_type: BTreeMap<String, u64>,
    pub pqrs_by_category: BTreeMap<String, u64>,

    pub average_days_to_resolve: f64,
    pub min_days_to_resolve: i64,
    pub max_days_to_resolve: i64,

    pub expired_pqrs: u64,
    /// Open complaints with at most three SLA days left
    pub near_expiration_pqrs: u64,
    pub average_days_from_expiration: f64,

    pub top_employees: Vec<EmployeeStats>,
    pub monthly_trends: Vec<MonthlyTrend>,

    pub resolution_rate: f64,
    /// Share of resolved complaints answered within the SLA window
    pub satisfaction_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeStats {
    pub employee_id: Uuid,
    pub employee_name: String,
    pub employee_email: String,
    pub total_assigned: u64,
    pub total_resolved: u64,
    pub average_resolution_time: f64,
    pub resolution_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrend {
    /// `YYYY-MM` of the filing date
    pub month: String,
    pub total_received: u64,
    pub total_resolved: u64,
    pub average_resolution_time: f64,
}
