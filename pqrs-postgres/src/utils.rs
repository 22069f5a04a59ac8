use heapless::String as HeaplessString;
use serde::de::DeserializeOwned;
use sqlx::{postgres::PgRow, types::Json, Row};
use std::error::Error;
use std::str::FromStr;

/// A trait for converting a database row into a model.
pub trait TryFromRow<R>: Sized {
    /// Performs the conversion.
    fn try_from_row(row: &R) -> Result<Self, Box<dyn Error + Send + Sync>>;
}

/// Retrieves a required `HeaplessString` from a row.
pub fn get_heapless_string<const N: usize>(
    row: &PgRow,
    col_name: &str,
) -> Result<HeaplessString<N>, Box<dyn Error + Send + Sync>> {
    let s: String = row.try_get(col_name)?;
    HeaplessString::from_str(&s).map_err(|_| {
        format!("Value for column '{col_name}' is too long (max {N} chars)").into()
    })
}

/// Decodes a required JSONB column.
pub fn get_json<T: DeserializeOwned>(
    row: &PgRow,
    col_name: &str,
) -> Result<T, Box<dyn Error + Send + Sync>> {
    let Json(value): Json<T> = row.try_get(col_name)?;
    Ok(value)
}

/// Decodes a nullable JSONB column.
pub fn get_optional_json<T: DeserializeOwned>(
    row: &PgRow,
    col_name: &str,
) -> Result<Option<T>, Box<dyn Error + Send + Sync>> {
    let value: Option<Json<T>> = row.try_get(col_name)?;
    Ok(value.map(|Json(inner)| inner))
}

/// Escapes `LIKE` wildcards so `term` matches literally.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
