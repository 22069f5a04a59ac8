use postgres_unit_of_work::Executor;
use crate::utils::{get_heapless_string, get_json, get_optional_json, TryFromRow};
use pqrs_db::models::{ComplaintModel, ComplaintStatus};
use sqlx::{postgres::PgRow, Row};
use std::error::Error;

pub struct ComplaintRepositoryImpl {
    pub(crate) executor: Executor,
}

impl ComplaintRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }

    /// Decodes every row of a complaint query
    pub(crate) fn map_rows(rows: Vec<PgRow>) -> Result<Vec<ComplaintModel>, Box<dyn Error + Send + Sync>> {
        rows.iter().map(ComplaintModel::try_from_row).collect()
    }
}

impl TryFromRow<PgRow> for ComplaintModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(ComplaintModel {
            id: row.try_get("id")?,
            reference: get_heapless_string(row, "reference")?,
            received_date: row.try_get("received_date")?,
            complaint_type: row.try_get("complaint_type")?,
            category: row.try_get("category")?,
            status: ComplaintStatus::from_code(row.try_get("status")?),
            subject: row.try_get("subject")?,
            description: row.try_get("description")?,
            location: row.try_get("location")?,
            user: row.try_get("user_id")?,
            user_profile: get_json(row, "user_profile")?,
            employee: row.try_get("employee_id")?,
            employee_profile: get_optional_json(row, "employee_profile")?,
            response: row.try_get("response")?,
            response_date: row.try_get("response_date")?,
            department: row.try_get("department")?,
            days_to_resolve: row.try_get("days_to_resolve")?,
            days_from_expiration: row.try_get("days_from_expiration")?,
            traceability: get_json(row, "traceability")?,
            prediction: row.try_get("prediction")?,
            updated_date: row.try_get("updated_date")?,
        })
    }
}
