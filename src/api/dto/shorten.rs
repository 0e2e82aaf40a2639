//! DTOs for the link creation endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
///
/// ```json
/// { "url": "https://example.com" }
/// ```
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be valid HTTP/HTTPS).
    #[validate(length(min = 1, max = 2048, message = "URL length is out of range"))]
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,
}

/// Response carrying the generated short code.
///
/// ```json
/// { "short": "aB3dE9" }
/// ```
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        let request: ShortenRequest =
            serde_json::from_str(r#"{"url":"https://example.com"}"#).unwrap();

        assert_eq!(request.url, "https://example.com");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_invalid_url_fails_validation() {
        let request = ShortenRequest {
            url: "definitely not a url".to_string(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_empty_url_fails_validation() {
        let request = ShortenRequest { url: String::new() };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_response_shape() {
        let body = serde_json::to_value(ShortenResponse {
            short: "aB3dE9".to_string(),
        })
        .unwrap();

        assert_eq!(body, serde_json::json!({ "short": "aB3dE9" }));
    }
}
