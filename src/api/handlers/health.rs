//! Handlers for health check endpoints.

use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;
use std::time::Instant;

use crate::api::dto::health::{ApiHealthResponse, DatabaseCheck, HealthDetails, HealthResponse};
use crate::state::AppState;

/// Comprehensive health check with database probe and totals.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: database reachable
/// - **500 Internal Server Error**: database probe failed
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let uptime = state.started_at.elapsed().as_secs_f64();

    let probe_start = Instant::now();
    let ping = ping_database(&state).await;
    let response_time = probe_start.elapsed().as_millis() as u64;
    let now = Utc::now();

    match ping {
        Ok(()) => {
            let total_urls = state.redirect_service.total_urls().await.ok();

            let response = HealthResponse {
                status: "ok",
                timestamp: now,
                uptime,
                database: DatabaseCheck {
                    status: "connected",
                    response_time: Some(response_time),
                    last_checked: now,
                    error: None,
                },
                details: Some(HealthDetails {
                    total_urls,
                    version: env!("CARGO_PKG_VERSION"),
                }),
            };

            (StatusCode::OK, Json(response))
        }
        Err(error) => {
            let response = HealthResponse {
                status: "error",
                timestamp: now,
                uptime,
                database: DatabaseCheck {
                    status: "error",
                    response_time: Some(response_time),
                    last_checked: now,
                    error: Some(error),
                },
                details: None,
            };

            (StatusCode::INTERNAL_SERVER_ERROR, Json(response))
        }
    }
}

/// Lightweight health check with a database ping.
///
/// # Endpoint
///
/// `GET /api/health`
pub async fn api_health_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiHealthResponse>) {
    match ping_database(&state).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiHealthResponse {
                status: "ok",
                timestamp: Utc::now(),
                database: "connected",
            }),
        ),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiHealthResponse {
                status: "error",
                timestamp: Utc::now(),
                database: "disconnected",
            }),
        ),
    }
}

async fn ping_database(state: &AppState) -> Result<(), String> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&state.db)
        .await
        .map(|_| ())
        .map_err(|e| e.to_string())
}
