//! Article repository
//!
//! - list: capped at `ARTICLE_LIST_LIMIT`, no ORDER BY (database order)
//! - get: single row by primary key
//!
//! Columns are cast to the types the mapper decodes, so INT4 ids or
//! `timestamptz` columns in the external schema read the same way.

use lecheleccion_core::{Article, ARTICLE_LIST_LIMIT};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use super::{utc_column, DbError};

/// Article repository
pub struct ArticleRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ArticleRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List up to `ARTICLE_LIST_LIMIT` articles.
    ///
    /// Order is whatever the database returns; callers must not rely on it.
    pub async fn list(&self) -> Result<Vec<Article>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT a.id::int8 AS id, a.url::text AS url,
                   a.url_to_image::text AS url_to_image, a.source::text AS source,
                   a.publication_date::timestamp AS publication_date,
                   a.title::text AS title, a.body::text AS body,
                   a.external_reference_id::int8 AS external_reference_id,
                   a.created_at::timestamp AS created_at,
                   a.updated_at::timestamp AS updated_at
            FROM collections.articles a
            LIMIT $1
            "#,
        )
        .bind(ARTICLE_LIST_LIMIT)
        .fetch_all(self.pool)
        .await?;

        let articles = rows
            .iter()
            .map(article_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(count = articles.len(), "listed articles");
        Ok(articles)
    }

    /// Get a single article by id.
    pub async fn get(&self, id: i64) -> Result<Article, DbError> {
        let row = sqlx::query(
            r#"
            SELECT a.id::int8 AS id, a.url::text AS url,
                   a.url_to_image::text AS url_to_image, a.source::text AS source,
                   a.publication_date::timestamp AS publication_date,
                   a.title::text AS title, a.body::text AS body,
                   a.external_reference_id::int8 AS external_reference_id,
                   a.created_at::timestamp AS created_at,
                   a.updated_at::timestamp AS updated_at
            FROM collections.articles a
            WHERE a.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("article", id))?;

        Ok(article_from_row(&row)?)
    }
}

fn article_from_row(row: &PgRow) -> Result<Article, sqlx::Error> {
    Ok(Article {
        id: row.try_get("id")?,
        url: row.try_get("url")?,
        url_to_image: row.try_get("url_to_image")?,
        source: row.try_get("source")?,
        publication_date: utc_column(row, "publication_date")?,
        title: row.try_get("title")?,
        body: row.try_get("body")?,
        external_reference_id: row.try_get("external_reference_id")?,
        created_at: utc_column(row, "created_at")?,
        updated_at: utc_column(row, "updated_at")?,
    })
}
