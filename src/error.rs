//! Application error taxonomy and HTTP translation.
//!
//! Expected conditions (validation failures, unknown short codes) map to 4xx
//! responses; unexpected dependency failures map to generic 500s with detail
//! kept in the logs. Unique-constraint races are represented as [`AppError::Conflict`]
//! so callers can translate them into their own recovery path.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use std::sync::LazyLock;

/// Whether error responses may carry internal detail (`APP_ENV=development`).
static DEV_MODE: LazyLock<bool> = LazyLock::new(|| {
    std::env::var("APP_ENV").is_ok_and(|v| v.eq_ignore_ascii_case("development"))
});

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Value::is_null")]
    errors: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<Value>,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    #[error("{message}")]
    Conflict { message: String, details: Value },

    /// Random code generation ran out of retries at every permitted length.
    /// Indicates an unexpectedly saturated code space.
    #[error("{message}")]
    CodeSpaceExhausted { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    pub fn code_space_exhausted(message: impl Into<String>, details: Value) -> Self {
        Self::CodeSpaceExhausted {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, errors, detail) = match self {
            AppError::Validation { message, details } => {
                (StatusCode::BAD_REQUEST, message, details, None)
            }
            AppError::NotFound { message, .. } => {
                (StatusCode::NOT_FOUND, message, Value::Null, None)
            }
            AppError::Conflict { message, .. } => {
                (StatusCode::CONFLICT, message, Value::Null, None)
            }
            AppError::CodeSpaceExhausted { message, details } => {
                tracing::error!(%message, %details, "short code space exhausted");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    Value::Null,
                    Some(json!({ "message": message, "details": details })),
                )
            }
            AppError::Internal { message, details } => {
                tracing::error!(%message, %details, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    Value::Null,
                    Some(json!({ "message": message, "details": details })),
                )
            }
        };

        let body = ErrorBody {
            success: false,
            message,
            errors,
            error: if *DEV_MODE { detail } else { None },
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            if db.is_unique_violation() {
                return AppError::conflict(
                    "Unique constraint violation",
                    json!({ "constraint": db.constraint() }),
                );
            }
        }

        tracing::error!(error = %e, "database error");
        AppError::internal("Database error", json!({}))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let errors = serde_json::to_value(&e).unwrap_or(Value::Null);
        AppError::bad_request("Validation failed", errors)
    }
}
