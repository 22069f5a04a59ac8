//! Schema setup and teardown from the crate's SQL file sets
//!
//! `migrations/` builds the schema and `cleanup/` drops it. Each set is
//! applied as raw SQL in file-name order inside its own tracing span.

use sqlx::PgPool;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, info_span, Instrument};

/// Creates the schema by executing `migrations/*.sql` in ascending order
///
/// Every statement is idempotent, so running it against an initialized
/// database is a no-op. Returns the number of files applied.
///
/// # Example
///
/// ```rust,no_run
/// use sqlx::PgPool;
/// use pqrs_postgres::repository::db_init::init_database;
///
/// # async fn example(pool: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
/// init_database(pool).await?;
/// # Ok(())
/// # }
/// ```
pub async fn init_database(pool: &PgPool) -> Result<usize, sqlx::Error> {
    apply_sql_set(pool, "migrations", true).await
}

/// Drops the schema by executing `cleanup/*.sql` in descending order
pub async fn cleanup_database(pool: &PgPool) -> Result<usize, sqlx::Error> {
    apply_sql_set(pool, "cleanup", false).await
}

fn sql_set_dir(set: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(set)
}

/// `*.sql` files of `dir` sorted by file name
pub fn sql_files_in_order(dir: &Path, ascending: bool) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some("sql") {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    if !ascending {
        files.reverse();
    }
    Ok(files)
}

async fn apply_sql_set(pool: &PgPool, set: &'static str, ascending: bool) -> Result<usize, sqlx::Error> {
    let files = sql_files_in_order(&sql_set_dir(set), ascending).map_err(sqlx::Error::Io)?;
    let span = info_span!("sql_set", set, files = files.len());

    async move {
        for path in &files {
            let sql = fs::read_to_string(path).map_err(sqlx::Error::Io)?;
            debug!(file = %path.display(), "Executing SQL file");
            sqlx::raw_sql(&sql).execute(pool).await?;
        }
        info!("SQL set applied");
        Ok(files.len())
    }
    .instrument(span)
    .await
}
