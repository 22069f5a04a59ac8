pub mod postgres_repositories;
pub mod repository;
pub mod utils;

pub use postgres_unit_of_work::Executor;
pub use postgres_repositories::{PostgresRepositories, PqrsRepositories};
pub use repository::complaint_repository::ComplaintRepositoryImpl;
pub use repository::user_repository::UserRepositoryImpl;

#[cfg(test)]
pub mod test_helper;
