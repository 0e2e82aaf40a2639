//! Handler for the link creation endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for one URL.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "short": "aB3dE9" }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if the body is not valid JSON of this shape or the URL is invalid
/// - 409 Conflict if the generated code collided with an existing one
/// - 500 Internal Server Error on database failures
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Unable to decode request body");
        AppError::bad_request(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    payload.validate()?;

    let link = state
        .link_service
        .create_short_link(payload.url)
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "Unable to create short link"))?;

    Ok(Json(ShortenResponse {
        short: link.short_code,
    }))
}
