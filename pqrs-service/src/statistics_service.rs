use chrono::Utc;
use pqrs_api::{ApiResult, DateRange};
use pqrs_db::repository::{FindAll, FindByDateRange};
use pqrs_db::{summarize_with, ComplaintModel, SlaPolicy, StatisticsReport};
use sqlx::Database;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::info;

/// Read-only dashboard aggregates over complaints filed in a date range
pub struct StatisticsService<DB, C>
where
    DB: Database,
{
    complaints: Arc<C>,
    policy: SlaPolicy,
    _db: PhantomData<fn() -> DB>,
}

impl<DB, C> StatisticsService<DB, C>
where
    DB: Database,
    C: FindAll<DB, ComplaintModel> + FindByDateRange<DB, ComplaintModel>,
{
    pub fn new(complaints: Arc<C>, policy: SlaPolicy) -> Self {
        Self {
            complaints,
            policy,
            _db: PhantomData,
        }
    }

    /// Builds the report for complaints received within `range`, whole days inclusive.
    pub async fn get_statistics(&self, range: DateRange) -> ApiResult<StatisticsReport> {
        let records = if range.is_unbounded() {
            self.complaints.find_all().await?
        } else {
            self.complaints
                .find_by_date_range(range.lower_bound(), range.upper_bound())
                .await?
        };

        let report = summarize_with(&records, Utc::now(), &self.policy);
        info!(
            start = ?range.start_date,
            end = ?range.end_date,
            total = report.total_pqrs,
            "Statistics computed"
        );
        Ok(report)
    }
}
