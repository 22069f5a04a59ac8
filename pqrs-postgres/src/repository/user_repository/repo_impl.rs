use postgres_unit_of_work::Executor;
use crate::utils::{get_heapless_string, TryFromRow};
use pqrs_db::models::{UserModel, UserRole};
use sqlx::{postgres::PgRow, Row};
use std::error::Error;
use std::str::FromStr;

pub struct UserRepositoryImpl {
    pub(crate) executor: Executor,
}

impl UserRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

impl TryFromRow<PgRow> for UserModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let role: String = row.try_get("role")?;
        Ok(UserModel {
            id: row.try_get("id")?,
            first_name: get_heapless_string(row, "first_name")?,
            last_name: get_heapless_string(row, "last_name")?,
            email: get_heapless_string(row, "email")?,
            role: UserRole::from_str(&role).map_err(|_| format!("Invalid user role '{role}'"))?,
        })
    }
}
