//! Handler for QR code rendering.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::api::dto::qr::{QrData, QrQuery, QrResponse};
use crate::application::services::{DEFAULT_QR_SIZE, MAX_QR_SIZE, MIN_QR_SIZE};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code_generator::validate_code_param;

/// Renders a QR code pointing at the short link.
///
/// # Endpoint
///
/// `GET /api/qr/{code}?format=png|base64&size=200`
///
/// # Output
///
/// - `png` (default): raw `image/png` body, cacheable for an hour
/// - `base64`: JSON envelope with a `data:image/png;base64,...` URI
///
/// # Errors
///
/// Returns 404 Not Found for unknown codes, 400 Bad Request for bad code
/// format, unknown output format, or size outside 100-1000.
pub async fn qr_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Query(params): Query<QrQuery>,
) -> Result<Response, AppError> {
    validate_code_param(&code)?;

    let size = params.size.unwrap_or(DEFAULT_QR_SIZE);
    if !(MIN_QR_SIZE..=MAX_QR_SIZE).contains(&size) {
        return Err(AppError::bad_request(
            "Size must be between 100-1000 pixels",
            json!({ "size": size }),
        ));
    }

    match params.format.as_deref() {
        Some("base64") => {
            let data_uri = state.qr_service.render_data_uri(&code, size).await?;

            let body = QrResponse {
                success: true,
                message: "QR code generated successfully".to_string(),
                data: QrData {
                    short_code: code,
                    format: "base64",
                    qr_code: data_uri,
                    size,
                },
            };

            Ok(Json(body).into_response())
        }
        Some("png") | None => {
            let png = state.qr_service.render_png(&code, size).await?;

            Ok((
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "image/png"),
                    (header::CACHE_CONTROL, "public, max-age=3600"),
                ],
                png,
            )
                .into_response())
        }
        Some(other) => Err(AppError::bad_request(
            "Format must be either 'png' or 'base64'",
            json!({ "format": other }),
        )),
    }
}
