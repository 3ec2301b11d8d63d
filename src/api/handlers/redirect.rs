//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code_generator::validate_code_param;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Click Tracking
///
/// Resolution counts the click as a single atomic store operation; there is
/// no separate tracking write that could be lost.
///
/// # Errors
///
/// Returns 404 Not Found for unknown codes and 400 Bad Request for codes
/// outside the accepted format.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    validate_code_param(&code)?;

    let original_url = state.redirect_service.resolve(&code).await?;

    debug!(code, %original_url, "redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, original_url)]))
}
