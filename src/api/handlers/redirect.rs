//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{debug, error};

use crate::error::AppError;
use crate::state::AppState;
use crate::web::assets::{asset_response, has_extension};

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}` (also mounted as `GET /r/{code}`)
///
/// # Request Flow
///
/// 1. A segment with a file extension (`/favicon.svg`) is a static asset, not a code
/// 2. Resolve the code through [`crate::application::services::LinkService::resolve`]
/// 3. Return 302 Found with `Location` set to the stored URL
///
/// The click counter update is queued by the service and never awaited here.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 500 Internal Server Error if the stored URL is not a valid header value.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    if has_extension(&code) {
        return asset_response(&code);
    }

    let Some(original_url) = state.link_service.resolve(&code).await? else {
        debug!(code = %code, "Unable to resolve short code");
        return Err(AppError::not_found(
            "Short link not found",
            json!({ "code": code }),
        ));
    };

    let location = HeaderValue::try_from(original_url.as_str()).map_err(|e| {
        error!(code = %code, error = %e, "Stored URL is not a valid Location header");
        AppError::internal("Stored URL cannot be redirected to", json!({ "code": code }))
    })?;

    debug!(code = %code, url = %original_url, "Short code resolved");

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
