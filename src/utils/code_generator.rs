//! Short code generation.
//!
//! Codes are drawn from the OS random source and encoded with the URL-safe
//! base64 alphabet (`A-Z`, `a-z`, `0-9`, `-`, `_`) without padding.

use crate::error::AppError;
use base64::Engine as _;
use serde_json::json;

/// Length of every generated short code.
pub const CODE_LENGTH: usize = 6;

/// Generates a cryptographically secure random short code of exactly `len`
/// characters.
///
/// Each base64 character carries six bits, so `len * 3 / 4` rounded up bytes
/// of entropy are enough to fill the requested length.
///
/// No uniqueness check is made against stored codes; collisions surface as a
/// conflict from the store.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the system random number generator fails.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(6)?;
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
/// ```
pub fn generate_code(len: usize) -> Result<String, AppError> {
    let mut buffer = vec![0u8; len.div_ceil(4) * 3];

    getrandom::fill(&mut buffer).map_err(|e| {
        tracing::error!(error = %e, "Random source unavailable");
        AppError::internal(
            "Failed to generate short code",
            json!({ "reason": "random source unavailable" }),
        )
    })?;

    let mut code = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(&buffer);
    code.truncate(len);

    Ok(code)
}

/// Returns true if `code` could have been produced by [`generate_code`].
pub fn is_url_safe(code: &str) -> bool {
    code.bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}
