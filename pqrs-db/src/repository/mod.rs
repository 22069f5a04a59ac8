pub mod find_all;
pub mod find_by_date_range;
pub mod find_by_email;
pub mod find_by_id;
pub mod find_by_id_for_update;
pub mod pagination;
pub mod save;
pub mod search;

// Re-exports
pub use find_all::*;
pub use find_by_date_range::*;
pub use find_by_email::*;
pub use find_by_id::*;
pub use find_by_id_for_update::*;
pub use pagination::*;
pub use save::*;
pub use search::*;
