use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for persisting a single entity
/// 
/// Inserts the entity when its ID is unknown and replaces the stored copy
/// otherwise. Returns the entity as persisted.
/// 
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement Identifiable trait
#[async_trait]
pub trait Save<DB: Database, T: Identifiable>: Send + Sync {
    /// Insert or replace `item`
    /// 
    /// # Returns
    /// * `Ok(T)` - The saved entity
    /// * `Err` - An error if the statement could not be executed
    async fn save(&self, item: T) -> Result<T, Box<dyn std::error::Error + Send + Sync>>;
}
