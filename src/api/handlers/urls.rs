//! Handler for mapping administration.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::urls::DeleteResponse;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code_generator::validate_code_param;

/// Deletes a mapping by its short code.
///
/// # Endpoint
///
/// `DELETE /api/urls/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown (including a repeat delete).
pub async fn delete_url_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    validate_code_param(&code)?;

    let deleted = state.redirect_service.delete(&code).await?;

    Ok(Json(DeleteResponse {
        message: "URL deleted successfully".to_string(),
        deleted_url: deleted.into(),
    }))
}
