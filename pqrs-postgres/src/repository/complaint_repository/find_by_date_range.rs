use async_trait::async_trait;
use chrono::{DateTime, Utc};
use pqrs_db::models::ComplaintModel;
use pqrs_db::repository::FindByDateRange;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::ComplaintRepositoryImpl;

#[async_trait]
impl FindByDateRange<Postgres, ComplaintModel> for ComplaintRepositoryImpl {
    async fn find_by_date_range(
        &self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Vec<ComplaintModel>, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(
            r#"
            SELECT * FROM complaint
            WHERE ($1::timestamptz IS NULL OR received_date >= $1)
              AND ($2::timestamptz IS NULL OR received_date <= $2)
            ORDER BY received_date, id
            "#,
        )
        .bind(start)
        .bind(end);

        let mut tx = self.executor.tx.lock().await;
        let rows = if let Some(transaction) = tx.as_mut() {
            query.fetch_all(&mut **transaction).await?
        } else {
            return Err("Transaction has been consumed".into());
        };

        Self::map_rows(rows)
    }
}
