pub mod find_all;
pub mod find_by_date_range;
pub mod find_by_id;
pub mod find_by_id_for_update;
pub mod repo_impl;
pub mod save;
pub mod search;

#[cfg(test)]
pub mod test_utils;

pub use repo_impl::ComplaintRepositoryImpl;
