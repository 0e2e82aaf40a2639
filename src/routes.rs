//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{code}`      - Short link redirect
//! - `GET  /r/{code}`    - Short link redirect (legacy prefix)
//! - `GET  /healthz`     - Liveness probe
//! - `/api/*`            - JSON API (create link, readiness)
//! - everything else     - Embedded front-end with SPA index fallback
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{liveness_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web::static_handler;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the application routes without path normalization.
///
/// Used directly by integration tests; [`app_router`] wraps it for serving.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(liveness_handler))
        .route("/{code}", get(redirect_handler))
        .route("/r/{code}", get(redirect_handler))
        .nest("/api", api::routes::api_routes())
        .fallback(static_handler)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/aB3dE9/` resolves the
/// same as `/aB3dE9`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}
