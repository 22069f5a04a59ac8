use async_trait::async_trait;
use pqrs_db::models::UserModel;
use pqrs_db::repository::Save;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::UserRepositoryImpl;

#[async_trait]
impl Save<Postgres, UserModel> for UserRepositoryImpl {
    async fn save(&self, item: UserModel) -> Result<UserModel, Box<dyn Error + Send + Sync>> {
        let role: &str = item.role.into();
        let query = sqlx::query(
            r#"
            INSERT INTO app_user (id, first_name, last_name, email, role)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE SET
                first_name = EXCLUDED.first_name,
                last_name = EXCLUDED.last_name,
                email = EXCLUDED.email,
                role = EXCLUDED.role
            "#,
        )
        .bind(item.id)
        .bind(item.first_name.as_str())
        .bind(item.last_name.as_str())
        .bind(item.email.as_str())
        .bind(role);

        let mut tx = self.executor.tx.lock().await;
        if let Some(transaction) = tx.as_mut() {
            query.execute(&mut **transaction).await?;
        } else {
            return Err("Transaction has been consumed".into());
        }

        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::complaint_repository::test_utils::test_utils::create_test_user;
    use crate::test_helper::setup_test_context;
    use pqrs_db::models::UserRole;
    use pqrs_db::repository::{FindById, Save};

    #[tokio::test]
    #[ignore]
    #[serial_test::serial]
    async fn test_save_user_updates_role() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repo = ctx.user_repository();

        let mut user = create_test_user("promoted");
        repo.save(user.clone()).await?;
        user.role = UserRole::Employee;
        repo.save(user.clone()).await?;

        assert_eq!(repo.find_by_id(user.id).await?, Some(user));
        Ok(())
    }
}
