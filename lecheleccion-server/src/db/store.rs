//! The store seam between handlers and the database

use async_trait::async_trait;
use lecheleccion_core::{Article, BiasMeta, BiasScores, User};
use sqlx::PgPool;

use super::repos::{ArticleRepo, BiasRepo, DbError, UserRepo};

/// Read-only access to articles, bias records and users.
///
/// Single-item lookups return `DbError::NotFound` when nothing matches,
/// never a default record.
#[async_trait]
pub trait BiasStore: Send + Sync {
    /// Up to `ARTICLE_LIST_LIMIT` articles, order unspecified.
    async fn list_articles(&self) -> Result<Vec<Article>, DbError>;

    async fn get_article(&self, id: i64) -> Result<Article, DbError>;

    /// Bias record referencing the given article.
    async fn get_bias(&self, article_id: i64) -> Result<BiasMeta, DbError>;

    /// Column averages over every bias record; `BiasScores::EMPTY` if none.
    async fn compute_average_bias(&self) -> Result<BiasScores, DbError>;

    async fn list_users(&self) -> Result<Vec<User>, DbError>;

    async fn get_user(&self, id: i64) -> Result<User, DbError>;

    /// Round trip to the backing store, for readiness checks.
    async fn ping(&self) -> Result<(), DbError>;
}

/// Postgres-backed store.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BiasStore for PgStore {
    async fn list_articles(&self) -> Result<Vec<Article>, DbError> {
        ArticleRepo::new(&self.pool).list().await
    }

    async fn get_article(&self, id: i64) -> Result<Article, DbError> {
        ArticleRepo::new(&self.pool).get(id).await
    }

    async fn get_bias(&self, article_id: i64) -> Result<BiasMeta, DbError> {
        BiasRepo::new(&self.pool).get_for_article(article_id).await
    }

    async fn compute_average_bias(&self) -> Result<BiasScores, DbError> {
        BiasRepo::new(&self.pool).averages().await
    }

    async fn list_users(&self) -> Result<Vec<User>, DbError> {
        UserRepo::new(&self.pool).list().await
    }

    async fn get_user(&self, id: i64) -> Result<User, DbError> {
        UserRepo::new(&self.pool).get(id).await
    }

    async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
