use postgres_unit_of_work::Executor;
use sqlx::PgPool;
use std::sync::Arc;
use tracing::debug;

use crate::repository::complaint_repository::ComplaintRepositoryImpl;
use crate::repository::user_repository::UserRepositoryImpl;

pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Create all repositories sharing a single transaction
    ///
    /// Nothing is persisted until [`PqrsRepositories::commit`] is called. Row
    /// locks taken by `find_by_id_for_update` are held until then.
    pub async fn create_all_repositories(&self) -> Result<PqrsRepositories, sqlx::Error> {
        let tx = self.pool.begin().await?;
        let executor = Executor::new(tx);

        Ok(PqrsRepositories {
            complaint_repository: Arc::new(ComplaintRepositoryImpl::new(executor.clone())),
            user_repository: Arc::new(UserRepositoryImpl::new(executor.clone())),
            executor,
        })
    }
}

/// One unit of work: the repositories and the transaction they share
///
/// The caller that created the unit of work owns its outcome. Dropping it
/// without committing rolls the transaction back.
pub struct PqrsRepositories {
    pub executor: Executor,
    pub complaint_repository: Arc<ComplaintRepositoryImpl>,
    pub user_repository: Arc<UserRepositoryImpl>,
}

impl PqrsRepositories {
    /// Commits the shared transaction. Later statements fail with `Transaction has been consumed`.
    pub async fn commit(&self) -> Result<(), sqlx::Error> {
        let taken = self.executor.tx.lock().await.take();
        if let Some(tx) = taken {
            tx.commit().await?;
            debug!("Unit of work committed");
        }
        Ok(())
    }

    pub async fn rollback(&self) -> Result<(), sqlx::Error> {
        let taken = self.executor.tx.lock().await.take();
        if let Some(tx) = taken {
            tx.rollback().await?;
            debug!("Unit of work rolled back");
        }
        Ok(())
    }

    pub async fn is_open(&self) -> bool {
        self.executor.tx.lock().await.is_some()
    }
}
