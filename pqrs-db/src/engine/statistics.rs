use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap};
use uuid::Uuid;

use super::policy::SlaPolicy;
use super::{round2, whole_days_between};
use crate::models::{
    ComplaintModel, ComplaintStatus, EmployeeStats, MonthlyTrend, ProfileSnapshot, StatisticsReport,
};

/// Running min/max/mean over resolution times
#[derive(Debug, Default)]
struct ResolutionTimes {
    count: u64,
    sum: i64,
    min: Option<i64>,
    max: Option<i64>,
}

impl ResolutionTimes {
    fn add(&mut self, days: i64) {
        self.count += 1;
        self.sum += days;
        self.min = Some(self.min.map_or(days, |m| m.min(days)));
        self.max = Some(self.max.map_or(days, |m| m.max(days)));
    }

    fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum as f64 / self.count as f64
        }
    }
}

struct EmployeeTally<'a> {
    id: Uuid,
    profile: &'a ProfileSnapshot,
    assigned: u64,
    resolved: u64,
    times: ResolutionTimes,
}

#[derive(Default)]
struct MonthTally {
    received: u64,
    resolved: u64,
    times: ResolutionTimes,
}

fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        round2(part as f64 * 100.0 / whole as f64)
    }
}

fn bump(counts: &mut BTreeMap<String, u64>, label: &str) {
    *counts.entry(label.to_string()).or_insert(0) += 1;
}

/// Summarizes `records` with the default SLA policy.
pub fn summarize(records: &[ComplaintModel], now: DateTime<Utc>) -> StatisticsReport {
    summarize_with(records, now, &SlaPolicy::default())
}

/// Computes every aggregate of the report in one pass over `records`.
///
/// `now` is the single reference instant for all elapsed-day computations of
/// the call. Input order only matters for ties in the employee leaderboard,
/// which keep discovery order.
pub fn summarize_with(
    records: &[ComplaintModel],
    now: DateTime<Utc>,
    policy: &SlaPolicy,
) -> StatisticsReport {
    let mut report = StatisticsReport::default();
    let mut times = ResolutionTimes::default();
    let mut expiration_sum = 0i64;
    let mut expiration_count = 0u64;
    let mut satisfactory = 0u64;
    let mut employees: Vec<EmployeeTally<'_>> = Vec::new();
    let mut employee_slots: HashMap<Uuid, usize> = HashMap::new();
    let mut months: BTreeMap<String, MonthTally> = BTreeMap::new();

    for complaint in records {
        let resolved = complaint.is_resolved();
        let resolve_days = complaint.days_to_resolve.filter(|_| resolved);

        report.total_pqrs += 1;
        match complaint.status {
            ComplaintStatus::New => report.open_pqrs += 1,
            ComplaintStatus::InProgress => report.in_progress_pqrs += 1,
            status if status.is_resolved() => report.closed_pqrs += 1,
            _ => {}
        }

        bump(&mut report.pqrs_by_status, complaint.status.label());
        bump(&mut report.pqrs_by_type, complaint.complaint_type().label());
        bump(&mut report.pqrs_by_category, complaint.category().label());

        if let Some(days) = resolve_days {
            times.add(days);
            if days <= policy.satisfaction_days {
                satisfactory += 1;
            }
        }

        if !resolved {
            let remaining = policy.expiration_days - whole_days_between(complaint.received_date, now);
            if remaining < 0 {
                report.expired_pqrs += 1;
            } else if remaining <= policy.near_expiration_days {
                report.near_expiration_pqrs += 1;
            }
        }

        if let Some(days) = complaint.days_from_expiration {
            expiration_sum += days;
            expiration_count += 1;
        }

        if let (Some(employee_id), Some(profile)) = (complaint.employee, &complaint.employee_profile) {
            let slot = *employee_slots.entry(employee_id).or_insert_with(|| {
                employees.push(EmployeeTally {
                    id: employee_id,
                    profile,
                    assigned: 0,
                    resolved: 0,
                    times: ResolutionTimes::default(),
                });
                employees.len() - 1
            });
            let tally = &mut employees[slot];
            tally.assigned += 1;
            if resolved {
                tally.resolved += 1;
            }
            if let Some(days) = resolve_days {
                tally.times.add(days);
            }
        }

        let month = months
            .entry(complaint.received_date.format("%Y-%m").to_string())
            .or_default();
        month.received += 1;
        if resolved {
            month.resolved += 1;
        }
        if let Some(days) = resolve_days {
            month.times.add(days);
        }
    }

    report.average_days_to_resolve = times.average();
    report.min_days_to_resolve = times.min.unwrap_or(0);
    report.max_days_to_resolve = times.max.unwrap_or(0);

    if expiration_count > 0 {
        report.average_days_from_expiration = expiration_sum as f64 / expiration_count as f64;
    }

    // Stable sort keeps discovery order among equal resolved counts
    employees.sort_by(|a, b| b.resolved.cmp(&a.resolved));
    report.top_employees = employees
        .into_iter()
        .take(policy.top_employees)
        .map(|tally| EmployeeStats {
            employee_id: tally.id,
            employee_name: tally.profile.full_name(),
            employee_email: tally.profile.email.to_string(),
            total_assigned: tally.assigned,
            total_resolved: tally.resolved,
            average_resolution_time: round2(tally.times.average()),
            resolution_rate: percentage(tally.resolved, tally.assigned),
        })
        .collect();

    report.monthly_trends = months
        .into_iter()
        .map(|(month, tally)| MonthlyTrend {
            month,
            total_received: tally.received,
            total_resolved: tally.resolved,
            average_resolution_time: round2(tally.times.average()),
        })
        .collect();

    report.resolution_rate = percentage(report.closed_pqrs, report.total_pqrs);
    report.satisfaction_rate = percentage(satisfactory, report.closed_pqrs);

    report
}
