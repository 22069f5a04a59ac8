use chrono::{DateTime, Utc};
use pqrs_api::ComplaintUpdate;

use super::policy::SlaPolicy;
use super::whole_days_between;
use crate::models::{ComplaintModel, ComplaintStatus, ProfileSnapshot, TraceModel, UserModel};

/// What an update does to a complaint, decided by its current and target status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Status unchanged: only response text and department are rewritten
    ResponseEdit,
    /// Moved to a non-resolved status: the response block is cleared
    Regression,
    /// Moved to resolved or closed: the response block is populated
    Resolution,
}

impl TransitionKind {
    pub fn classify(current: ComplaintStatus, target: ComplaintStatus) -> Self {
        if current == target {
            TransitionKind::ResponseEdit
        } else if target.is_resolved() {
            TransitionKind::Resolution
        } else {
            TransitionKind::Regression
        }
    }
}

/// Target status of `update`; a missing status keeps the current one.
pub fn target_status(current: &ComplaintModel, update: &ComplaintUpdate) -> ComplaintStatus {
    update
        .status
        .map(ComplaintStatus::from_code)
        .unwrap_or(current.status)
}

/// Applies `update` to `current` on behalf of `acting_employee` with the default SLA policy.
pub fn apply(
    current: &ComplaintModel,
    update: &ComplaintUpdate,
    acting_employee: &UserModel,
    now: DateTime<Utc>,
) -> ComplaintModel {
    apply_with(current, update, acting_employee, now, &SlaPolicy::default())
}

/// Computes the next state of a complaint.
///
/// The returned value is complete: response block, SLA metrics and trace log
/// are derived together, and `current` is left untouched. A response edit
/// appends no trace and recomputes no metric.
pub fn apply_with(
    current: &ComplaintModel,
    update: &ComplaintUpdate,
    acting_employee: &UserModel,
    now: DateTime<Utc>,
    policy: &SlaPolicy,
) -> ComplaintModel {
    let target = target_status(current, update);
    let mut next = current.clone();

    match TransitionKind::classify(current.status, target) {
        TransitionKind::ResponseEdit => {
            // Absent fields keep their value so a resolved complaint never loses its response.
            if let Some(response) = &update.response {
                next.response = Some(response.clone());
            }
            if let Some(department) = &update.department {
                next.department = Some(department.clone());
            }
        }
        TransitionKind::Regression => {
            next.response = None;
            next.response_date = None;
            next.employee = None;
            next.employee_profile = None;
            next.department = None;
            next.days_to_resolve = None;
            next.days_from_expiration = None;
            next.traceability.push(TraceModel::new(
                now,
                format!("Estado cambiado a {}", target.label()),
                &acting_employee.email,
            ));
        }
        TransitionKind::Resolution => {
            next.response_date = Some(now);
            next.response = Some(update.response.clone().unwrap_or_default());
            next.employee = Some(acting_employee.id);
            next.employee_profile = Some(ProfileSnapshot::from(acting_employee));
            next.department = update.department.clone();
            next.days_to_resolve = Some(whole_days_between(current.received_date, now));
            next.days_from_expiration =
                Some(policy.expiration_days - whole_days_between(current.received_date, now));
            next.traceability.push(TraceModel::new(
                now,
                format!("Radicado {}", target.label()),
                &acting_employee.email,
            ));
        }
    }

    next.status = target;
    next.updated_date = Some(now);
    next
}
