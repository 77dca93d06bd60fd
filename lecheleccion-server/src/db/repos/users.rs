use lecheleccion_core::User;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use super::DbError;

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Every user, unordered.
    pub async fn list(&self) -> Result<Vec<User>, DbError> {
        let rows = sqlx::query("SELECT u.id::int8 AS id, u.name::text AS name FROM collections.users u")
            .fetch_all(self.pool)
            .await?;

        Ok(rows
            .iter()
            .map(user_from_row)
            .collect::<Result<Vec<_>, _>>()?)
    }

    pub async fn get(&self, id: i64) -> Result<User, DbError> {
        let row = sqlx::query(
            "SELECT u.id::int8 AS id, u.name::text AS name FROM collections.users u WHERE u.id = $1",
        )
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("user", id))?;

        Ok(user_from_row(&row)?)
    }
}

fn user_from_row(row: &PgRow) -> Result<User, sqlx::Error> {
    Ok(User {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
    })
}
