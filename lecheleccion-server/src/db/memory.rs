//! In-memory store
//!
//! Fixed data set with the same contract as [`PgStore`](super::PgStore).
//! Used by the router tests.

use async_trait::async_trait;
use lecheleccion_core::{Article, BiasMeta, BiasScores, User, ARTICLE_LIST_LIMIT};

use super::repos::DbError;
use super::store::BiasStore;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    articles: Vec<Article>,
    biases: Vec<BiasMeta>,
    users: Vec<User>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_articles(mut self, articles: impl IntoIterator<Item = Article>) -> Self {
        self.articles.extend(articles);
        self
    }

    pub fn with_biases(mut self, biases: impl IntoIterator<Item = BiasMeta>) -> Self {
        self.biases.extend(biases);
        self
    }

    pub fn with_users(mut self, users: impl IntoIterator<Item = User>) -> Self {
        self.users.extend(users);
        self
    }
}

#[async_trait]
impl BiasStore for MemoryStore {
    async fn list_articles(&self) -> Result<Vec<Article>, DbError> {
        Ok(self
            .articles
            .iter()
            .take(ARTICLE_LIST_LIMIT as usize)
            .cloned()
            .collect())
    }

    async fn get_article(&self, id: i64) -> Result<Article, DbError> {
        self.articles
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| DbError::not_found("article", id))
    }

    async fn get_bias(&self, article_id: i64) -> Result<BiasMeta, DbError> {
        self.biases
            .iter()
            .filter(|b| b.subject.article_id() == Some(article_id))
            .min_by_key(|b| b.id)
            .cloned()
            .ok_or_else(|| DbError::not_found("bias", article_id))
    }

    async fn compute_average_bias(&self) -> Result<BiasScores, DbError> {
        Ok(BiasScores::mean(self.biases.iter().map(|b| &b.scores)))
    }

    async fn list_users(&self) -> Result<Vec<User>, DbError> {
        Ok(self.users.clone())
    }

    async fn get_user(&self, id: i64) -> Result<User, DbError> {
        self.users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| DbError::not_found("user", id))
    }

    async fn ping(&self) -> Result<(), DbError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use lecheleccion_core::Biasable;

    fn article(id: i64) -> Article {
        let at = Utc.with_ymd_and_hms(2018, 6, 1, 12, 0, 0).unwrap();
        Article {
            id,
            url: format!("https://example.com/{id}"),
            url_to_image: None,
            source: "Example Wire".into(),
            publication_date: at,
            title: format!("Article {id}"),
            body: String::new(),
            external_reference_id: id * 10,
            created_at: at,
            updated_at: at,
        }
    }

    fn bias(id: i64, subject: Biasable, scores: BiasScores) -> BiasMeta {
        let at = Utc.with_ymd_and_hms(2018, 6, 1, 12, 0, 0).unwrap();
        BiasMeta {
            id,
            scores,
            subject,
            created_at: at,
            updated_at: at,
        }
    }

    #[tokio::test]
    async fn list_is_capped() {
        let store = MemoryStore::new().with_articles((1..=120).map(article));
        let listed = store.list_articles().await.unwrap();
        assert_eq!(listed.len(), ARTICLE_LIST_LIMIT as usize);
    }

    #[tokio::test]
    async fn get_article_matches_id() {
        let store = MemoryStore::new().with_articles((1..=3).map(article));
        for id in 1..=3 {
            assert_eq!(store.get_article(id).await.unwrap().id, id);
        }
    }

    #[tokio::test]
    async fn missing_article_is_not_found() {
        let store = MemoryStore::new().with_articles((1..=3).map(article));
        let err = store.get_article(42).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "article", .. }));
    }

    #[tokio::test]
    async fn bias_lookup_ignores_other_kinds() {
        let scores = BiasScores::new(0.1, 0.2, 0.3, 0.4);
        let store = MemoryStore::new().with_biases([
            bias(1, Biasable::from_parts("Comment", 7), scores),
            bias(3, Biasable::Article(7), scores),
            bias(2, Biasable::Article(7), scores),
        ]);

        let found = store.get_bias(7).await.unwrap();
        assert_eq!(found.id, 2);

        let err = store.get_bias(8).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "bias", .. }));
    }

    #[tokio::test]
    async fn averages_on_empty_store_are_zero() {
        let avg = MemoryStore::new().compute_average_bias().await.unwrap();
        assert_eq!(avg, BiasScores::EMPTY);
    }
}
