//! API route configuration.

use crate::api::handlers::{
    api_health_handler, delete_url_handler, overall_stats_handler, qr_handler, shorten_handler,
    stats_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// All `/api` routes.
///
/// # Endpoints
///
/// - `POST   /shorten`      - Create (or return) a short link
/// - `GET    /info/{code}`  - Statistics for one short code
/// - `GET    /stats`        - Overall statistics
/// - `GET    /qr/{code}`    - QR code image or data URI
/// - `DELETE /urls/{code}`  - Delete a mapping
/// - `GET    /health`       - Lightweight health check
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/info/{code}", get(stats_handler))
        .route("/stats", get(overall_stats_handler))
        .route("/qr/{code}", get(qr_handler))
        .route("/urls/{code}", delete(delete_url_handler))
        .route("/health", get(api_health_handler))
}
