use async_trait::async_trait;
use pqrs_db::models::UserModel;
use pqrs_db::repository::FindByEmail;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::UserRepositoryImpl;
use crate::utils::TryFromRow;

#[async_trait]
impl FindByEmail<Postgres, UserModel> for UserRepositoryImpl {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserModel>, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query("SELECT * FROM app_user WHERE lower(email) = lower($1)").bind(email);

        let mut tx = self.executor.tx.lock().await;
        let row = if let Some(transaction) = tx.as_mut() {
            query.fetch_optional(&mut **transaction).await?
        } else {
            return Err("Transaction has been consumed".into());
        };

        row.as_ref().map(UserModel::try_from_row).transpose()
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::complaint_repository::test_utils::test_utils::create_test_user;
    use crate::test_helper::setup_test_context;
    use pqrs_db::repository::{FindByEmail, Save};

    #[tokio::test]
    #[ignore]
    #[serial_test::serial]
    async fn test_find_by_email_ignores_case() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repo = ctx.user_repository();

        let user = create_test_user("Lookup");
        repo.save(user.clone()).await?;

        let found = repo.find_by_email(&user.email.to_uppercase()).await?;
        assert_eq!(found, Some(user));

        assert!(repo.find_by_email("nobody@test.com").await?.is_none());
        Ok(())
    }
}
