//! DTOs for the shorten endpoint.

use crate::application::services::ShortenOutcome;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be valid HTTP/HTTPS).
    #[validate(
        url(message = "Please provide a valid URL with http or https protocol"),
        length(max = 2048, message = "URL must not exceed 2048 characters")
    )]
    pub url: String,
}

/// Envelope for a successful shorten call.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub success: bool,
    pub message: String,
    pub data: ShortenData,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenData {
    pub short_url: String,
    pub original_url: String,
    pub short_code: String,
    pub qr_code_url: String,
    pub is_new: bool,
}

impl From<ShortenOutcome> for ShortenData {
    fn from(outcome: ShortenOutcome) -> Self {
        Self {
            short_url: outcome.short_url,
            original_url: outcome.original_url,
            short_code: outcome.short_code,
            qr_code_url: outcome.qr_code_url,
            is_new: outcome.is_new,
        }
    }
}
