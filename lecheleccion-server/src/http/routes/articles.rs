//! Article endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Router};
use lecheleccion_core::{Article, ArticlesEnvelope};

use super::bounded;
use crate::http::error::ApiError;
use crate::http::extractors::ValidId;
use crate::http::response::JsonBody;
use crate::http::server::AppState;

/// GET /api/articles - article page plus global bias averages
async fn list_articles(
    State(state): State<Arc<AppState>>,
) -> Result<JsonBody<ArticlesEnvelope>, ApiError> {
    let store = &state.store;
    let (articles, averages) = bounded(state.request_timeout, async {
        tokio::try_join!(store.list_articles(), store.compute_average_bias())
    })
    .await?;

    Ok(JsonBody(ArticlesEnvelope { articles, averages }))
}

/// GET /api/articles/{id}
async fn get_article(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<JsonBody<Article>, ApiError> {
    fetch_article(&state, id).await.map(JsonBody)
}

pub(crate) async fn fetch_article(state: &AppState, id: i64) -> Result<Article, ApiError> {
    bounded(state.request_timeout, state.store.get_article(id)).await
}

/// Article routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/articles", get(list_articles))
        .route("/api/articles/{id}", get(get_article))
}
