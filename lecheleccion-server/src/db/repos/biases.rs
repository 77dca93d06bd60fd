//! Bias repository
//!
//! - get_for_article: bias row referencing `Article(id)`
//! - averages: AVG() of each score column over the whole table
//!
//! Scores are cast to float8 and ids to int8 whatever the stored type
//! (REAL, NUMERIC, INT4).

use lecheleccion_core::bias::ARTICLE_KIND;
use lecheleccion_core::{BiasMeta, BiasScores, Biasable};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use super::{utc_column, DbError};

/// Bias repository
pub struct BiasRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> BiasRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get the bias record scoring the given article.
    ///
    /// If several rows reference the same article the lowest id wins.
    pub async fn get_for_article(&self, article_id: i64) -> Result<BiasMeta, DbError> {
        let row = sqlx::query(
            r#"
            SELECT b.id::int8 AS id,
                   b.libertarian::float8 AS libertarian,
                   b.green::float8 AS green,
                   b.liberal::float8 AS liberal,
                   b.conservative::float8 AS conservative,
                   b.biasable_type::text AS biasable_type,
                   b.biasable_id::int8 AS biasable_id,
                   b.created_at::timestamp AS created_at,
                   b.updated_at::timestamp AS updated_at
            FROM collections.biases b
            WHERE b.biasable_type = $1 AND b.biasable_id = $2
            ORDER BY b.id
            LIMIT 1
            "#,
        )
        .bind(ARTICLE_KIND)
        .bind(article_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("bias", article_id))?;

        Ok(bias_from_row(&row)?)
    }

    /// Average of each score across every bias row.
    ///
    /// An empty table yields SQL NULLs, reported as 0.0.
    pub async fn averages(&self) -> Result<BiasScores, DbError> {
        let row = sqlx::query(
            r#"
            SELECT AVG(b.libertarian)::float8 AS libertarian,
                   AVG(b.green)::float8 AS green,
                   AVG(b.liberal)::float8 AS liberal,
                   AVG(b.conservative)::float8 AS conservative
            FROM collections.biases b
            "#,
        )
        .fetch_one(self.pool)
        .await?;

        Ok(BiasScores::from_nullable(
            row.try_get("libertarian")?,
            row.try_get("green")?,
            row.try_get("liberal")?,
            row.try_get("conservative")?,
        ))
    }
}

fn bias_from_row(row: &PgRow) -> Result<BiasMeta, sqlx::Error> {
    let kind: String = row.try_get("biasable_type")?;
    Ok(BiasMeta {
        id: row.try_get("id")?,
        scores: BiasScores::new(
            row.try_get("libertarian")?,
            row.try_get("green")?,
            row.try_get("liberal")?,
            row.try_get("conservative")?,
        ),
        subject: Biasable::from_parts(kind, row.try_get("biasable_id")?),
        created_at: utc_column(row, "created_at")?,
        updated_at: utc_column(row, "updated_at")?,
    })
}
