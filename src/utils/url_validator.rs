//! Target URL validation.
//!
//! Shortened targets must be well-formed absolute URLs using `http` or
//! `https`. Other schemes (`javascript:`, `data:`, `file:`, ...) are refused
//! at the boundary so they can never be stored or redirected to.

use crate::error::AppError;
use serde_json::json;
use url::Url;

/// Maximum accepted length for a target URL.
pub const MAX_URL_LENGTH: usize = 2048;

/// Validates a URL submitted for shortening.
///
/// # Errors
///
/// Returns [`AppError::Validation`] when the URL is longer than
/// [`MAX_URL_LENGTH`], fails to parse, or uses a scheme other than
/// `http`/`https`.
pub fn validate_target_url(input: &str) -> Result<(), AppError> {
    if input.len() > MAX_URL_LENGTH {
        return Err(AppError::bad_request(
            "URL must not exceed 2048 characters",
            json!({ "length": input.len() }),
        ));
    }

    let url = Url::parse(input).map_err(|e| {
        AppError::bad_request(
            "Please provide a valid URL with http or https protocol",
            json!({ "reason": e.to_string() }),
        )
    })?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(AppError::bad_request(
            "Please provide a valid URL with http or https protocol",
            json!({ "scheme": scheme }),
        )),
    }
}
