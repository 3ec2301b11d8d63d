//! Handler for the shorten endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_validator::validate_target_url;

/// Creates or returns a short link for a URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Behavior
///
/// Shortening is idempotent: re-submitting an already shortened URL returns
/// the existing mapping with `isNew = false` and performs no write.
///
/// # Errors
///
/// Returns 400 Bad Request for malformed URLs or disallowed schemes.
/// Returns 500 Internal Server Error when code generation is exhausted or
/// the database fails.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;
    validate_target_url(&payload.url)?;

    let outcome = state.shorten_service.shorten(payload.url).await?;

    let message = if outcome.is_new {
        "URL shortened successfully"
    } else {
        "URL already exists"
    };

    Ok(Json(ShortenResponse {
        success: true,
        message: message.to_string(),
        data: outcome.into(),
    }))
}
