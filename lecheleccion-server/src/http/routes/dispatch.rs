//! Legacy `/api/{requestType}/{id}` endpoint
//!
//! Older clients ask for `/api/article/{id}` through one multiplexed route.
//! `bias` never arrives here: the static `/api/bias/{id}` route wins the
//! match and serves the same lookup. Any other type is rejected with a fixed
//! message.

use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    routing::get,
    Router,
};
use lecheleccion_core::Article;

use super::articles::fetch_article;
use crate::http::error::ApiError;
use crate::http::extractors::parse_id;
use crate::http::response::JsonBody;
use crate::http::server::AppState;

/// Message returned for an unrecognised request type.
pub const MALFORMED_PARAMS: &str = "Malformed params. Please try again.";

/// GET /api/{request_type}/{id}
async fn dispatch(
    State(state): State<Arc<AppState>>,
    path: Result<Path<(String, String)>, PathRejection>,
) -> Result<JsonBody<Article>, ApiError> {
    let Path((request_type, raw_id)) = path.map_err(|e| {
        tracing::debug!(error = %e, "unusable path");
        ApiError::bad_request(MALFORMED_PARAMS)
    })?;

    if request_type != "article" {
        tracing::debug!(request_type = %request_type, "unknown request type");
        return Err(ApiError::bad_request(MALFORMED_PARAMS));
    }

    let id = parse_id(&raw_id)?;
    fetch_article(&state, id).await.map(JsonBody)
}

/// Dispatch routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/{request_type}/{id}", get(dispatch))
}
