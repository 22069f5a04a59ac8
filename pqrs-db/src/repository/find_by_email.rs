use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for resolving an identity by email
/// 
/// Email comparison is case-insensitive.
#[async_trait]
pub trait FindByEmail<DB: Database, T: Identifiable>: Send + Sync {
    /// # Returns
    /// * `Ok(Some(T))` - The identity registered under `email`
    /// * `Ok(None)` - If no identity uses that email
    /// * `Err` - An error if the query could not be executed
    async fn find_by_email(&self, email: &str) -> Result<Option<T>, Box<dyn std::error::Error + Send + Sync>>;
}
