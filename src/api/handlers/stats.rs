//! Handlers for per-code and overall statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::{
    OverallStatsData, OverallStatsResponse, UrlStatsResponse, UrlSummary,
};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code_generator::validate_code_param;

/// Retrieves statistics for a specific short code.
///
/// # Endpoint
///
/// `GET /api/info/{code}`
///
/// Read-only: the click count is reported, not incremented.
///
/// # Errors
///
/// Returns 404 Not Found for unknown codes, 400 Bad Request for codes
/// outside the accepted format.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<UrlStatsResponse>, AppError> {
    validate_code_param(&code)?;

    let mapping = state.redirect_service.stats(&code).await?;

    Ok(Json(UrlStatsResponse {
        success: true,
        message: "URL statistics retrieved successfully".to_string(),
        data: mapping.into(),
    }))
}

/// Retrieves overall statistics: total mappings and the ten newest.
///
/// # Endpoint
///
/// `GET /api/stats`
pub async fn overall_stats_handler(
    State(state): State<AppState>,
) -> Result<Json<OverallStatsResponse>, AppError> {
    let stats = state.redirect_service.overall_stats().await?;

    Ok(Json(OverallStatsResponse {
        success: true,
        message: "Overall statistics retrieved successfully".to_string(),
        data: OverallStatsData {
            total_urls: stats.total_urls,
            recent_urls: stats.recent_urls.into_iter().map(UrlSummary::from).collect(),
        },
    }))
}
