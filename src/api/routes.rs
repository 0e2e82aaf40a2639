//! API route configuration.

use crate::api::handlers::{health_handler, shorten_handler};
use crate::error::AppError;
use crate::state::AppState;
use axum::{
    Router,
    http::Uri,
    routing::{get, post},
};
use serde_json::json;

/// Routes nested under `/api`.
///
/// # Endpoints
///
/// - `POST /links`  - Create a short link
/// - `GET  /health` - Readiness with component checks
///
/// Unknown paths under `/api` answer with a JSON 404 instead of the front-end.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/links", post(shorten_handler))
        .route("/health", get(health_handler))
        .fallback(api_not_found)
}

async fn api_not_found(uri: Uri) -> AppError {
    AppError::not_found("Unknown API endpoint", json!({ "path": uri.path() }))
}
