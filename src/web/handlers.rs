//! Handler for static asset and SPA routes.

use axum::{http::Uri, response::Response};

use crate::error::AppError;
use crate::web::assets::{asset_response, has_extension, index_response};

/// Serves the embedded front-end for every path not claimed by another route.
///
/// # Behaviour
///
/// - Path with a file extension (`/assets/app.js`) → that file, or 404
/// - Root or multi-segment path without an extension (`/`, `/docs/about`) → `index.html`
///
/// Single segments without an extension never reach this handler; the router
/// treats them as short codes.
pub async fn static_handler(uri: Uri) -> Result<Response, AppError> {
    let path = uri.path();

    if has_extension(path) {
        return asset_response(path);
    }

    tracing::debug!(path, "Serving index.html for non-file route");
    index_response()
}
