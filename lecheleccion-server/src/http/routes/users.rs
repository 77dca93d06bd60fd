//! User endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Router};
use lecheleccion_core::{User, UsersEnvelope};

use super::bounded;
use crate::http::error::ApiError;
use crate::http::extractors::ValidId;
use crate::http::response::JsonBody;
use crate::http::server::AppState;

/// GET /api/users
async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<JsonBody<UsersEnvelope>, ApiError> {
    let index = bounded(state.request_timeout, state.store.list_users()).await?;
    Ok(JsonBody(UsersEnvelope { index }))
}

/// GET /api/users/{id}
async fn get_user(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<JsonBody<User>, ApiError> {
    let user = bounded(state.request_timeout, state.store.get_user(id)).await?;
    Ok(JsonBody(user))
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/users", get(list_users))
        .route("/api/users/{id}", get(get_user))
}
