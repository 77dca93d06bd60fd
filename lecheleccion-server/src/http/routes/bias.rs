//! Bias endpoint

use std::sync::Arc;

use axum::{extract::State, routing::get, Router};
use lecheleccion_core::BiasMeta;

use super::bounded;
use crate::http::error::ApiError;
use crate::http::extractors::ValidId;
use crate::http::response::JsonBody;
use crate::http::server::AppState;

/// GET /api/bias/{id} - bias record for article `id`
async fn get_bias(
    State(state): State<Arc<AppState>>,
    ValidId(article_id): ValidId,
) -> Result<JsonBody<BiasMeta>, ApiError> {
    let bias = bounded(state.request_timeout, state.store.get_bias(article_id)).await?;
    Ok(JsonBody(bias))
}

/// Bias routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/bias/{id}", get(get_bias))
}
