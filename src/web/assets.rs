//! Embedded front-end bundle.
//!
//! The contents of `frontend/dist/` are compiled into the binary. Lookups are
//! by path relative to that folder, e.g. `assets/app.js`.

use std::path::{Component, Path};

use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use rust_embed::Embed;
use serde_json::json;

use crate::error::AppError;

#[derive(Embed)]
#[folder = "frontend/dist/"]
struct FrontendAssets;

/// Document served for every path without a file extension.
pub const INDEX_DOCUMENT: &str = "index.html";

/// Returns true if the last path segment carries a file extension.
pub fn has_extension(path: &str) -> bool {
    Path::new(path).extension().is_some()
}

/// Serves one embedded file with a content type guessed from its extension.
///
/// # Errors
///
/// Returns [`AppError::NotFound`] if the bundle has no such file or the path
/// tries to leave the bundle root.
pub fn asset_response(path: &str) -> Result<Response, AppError> {
    let path = path.trim_start_matches('/');

    let escapes_root = Path::new(path)
        .components()
        .any(|c| !matches!(c, Component::Normal(_)));

    let file = (!escapes_root)
        .then(|| FrontendAssets::get(path))
        .flatten()
        .ok_or_else(|| AppError::not_found("Asset not found", json!({ "path": path })))?;

    tracing::trace!(path, mime = file.metadata.mimetype(), "Serving static asset");

    Ok((
        [(header::CONTENT_TYPE, file.metadata.mimetype().to_string())],
        file.data,
    )
        .into_response())
}

/// Serves the single-page-app index document.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the bundle was built without an index.
pub fn index_response() -> Result<Response, AppError> {
    let file = FrontendAssets::get(INDEX_DOCUMENT).ok_or_else(|| {
        tracing::error!("index.html missing from embedded bundle");
        AppError::internal("index.html not found", json!({}))
    })?;

    Ok((
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        file.data,
    )
        .into_response())
}
