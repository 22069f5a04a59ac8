use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for selecting entities by their filing instant
/// 
/// Both bounds are inclusive; a missing bound leaves that side of the range open.
/// 
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement Identifiable trait
#[async_trait]
pub trait FindByDateRange<DB: Database, T: Identifiable>: Send + Sync {
    /// Find entities received within `[start, end]`
    /// 
    /// # Arguments
    /// * `start` - Earliest instant included, or `None` for no lower bound
    /// * `end` - Latest instant included, or `None` for no upper bound
    async fn find_by_date_range(
        &self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
