pub mod complaint_repository;
pub mod db_init;
pub mod user_repository;
