//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Fixed statements against the `collections` schema, ids bound as `$1`
//! - Rows mapped with `try_get`, so a bad row fails the whole call
//! - Single-row lookups use `fetch_optional` and map `None` to `NotFound`

pub mod articles;
pub mod biases;
pub mod users;

use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::Row;

pub use articles::ArticleRepo;
pub use biases::BiasRepo;
pub use users::UserRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    pub fn not_found(resource: &'static str, id: i64) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}

/// Read a column cast to `timestamp` as UTC.
///
/// sqlx sessions run with `TimeZone=UTC`, so a `timestamptz` cast lands in UTC.
pub(crate) fn utc_column(row: &PgRow, column: &str) -> Result<DateTime<Utc>, sqlx::Error> {
    let naive: NaiveDateTime = row.try_get(column)?;
    Ok(naive.and_utc())
}
