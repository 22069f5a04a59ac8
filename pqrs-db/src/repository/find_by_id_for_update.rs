use async_trait::async_trait;
use sqlx::Database;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Loads an entity and locks it against concurrent writers
///
/// The lock belongs to the caller's unit of work and is released only when
/// that unit of work commits or rolls back, so a read-modify-write built on
/// this lookup cannot interleave with another one on the same entity.
#[async_trait]
pub trait FindByIdForUpdate<DB: Database, T: Identifiable>: Send + Sync {
    async fn find_by_id_for_update(&self, id: Uuid) -> Result<Option<T>, Box<dyn std::error::Error + Send + Sync>>;
}
