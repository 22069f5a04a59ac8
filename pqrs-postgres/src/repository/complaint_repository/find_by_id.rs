use async_trait::async_trait;
use pqrs_db::models::ComplaintModel;
use pqrs_db::repository::FindById;
use sqlx::Postgres;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::ComplaintRepositoryImpl;
use crate::utils::TryFromRow;

#[async_trait]
impl FindById<Postgres, ComplaintModel> for ComplaintRepositoryImpl {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ComplaintModel>, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query("SELECT * FROM complaint WHERE id = $1").bind(id);

        let mut tx = self.executor.tx.lock().await;
        let row = if let Some(transaction) = tx.as_mut() {
            query.fetch_optional(&mut **transaction).await?
        } else {
            return Err("Transaction has been consumed".into());
        };

        row.as_ref().map(ComplaintModel::try_from_row).transpose()
    }
}
