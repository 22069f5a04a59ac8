use async_trait::async_trait;
use pqrs_db::models::ComplaintModel;
use pqrs_db::repository::FindAll;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::ComplaintRepositoryImpl;

#[async_trait]
impl FindAll<Postgres, ComplaintModel> for ComplaintRepositoryImpl {
    async fn find_all(&self) -> Result<Vec<ComplaintModel>, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query("SELECT * FROM complaint ORDER BY received_date, id");

        let mut tx = self.executor.tx.lock().await;
        let rows = if let Some(transaction) = tx.as_mut() {
            query.fetch_all(&mut **transaction).await?
        } else {
            return Err("Transaction has been consumed".into());
        };

        Self::map_rows(rows)
    }
}
