//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::domain::FieldErrors;

/// Application error kinds. The set is closed: callers match on it.
#[derive(Error, Debug)]
pub enum AppError {
    /// One or more fields failed validation
    #[error("Validation failed: {}", summarize(.0))]
    Validation(FieldErrors),

    /// Request body could not be read as an employee record
    #[error("Malformed request: {0}")]
    Malformed(String),

    #[error("Employee not found")]
    NotFound,

    /// Any failure reported by the record store
    #[error("{0}")]
    Store(#[from] sea_orm::DbErr),

    // Process-level failures (bind, serve)
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body. `error` is always a plain string.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable message
    #[schema(example = "Validation failed: salary")]
    pub error: String,
    /// Machine-readable error kind
    #[schema(value_type = String, example = "VALIDATION_ERROR")]
    pub code: &'static str,
    /// Field-level messages (validation errors only)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub fields: Option<FieldErrors>,
}

fn summarize(errors: &FieldErrors) -> String {
    errors.keys().map(String::as_str).collect::<Vec<_>>().join(", ")
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Malformed(_) => "BAD_REQUEST",
            AppError::NotFound => "NOT_FOUND",
            AppError::Store(_) => "STORE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Malformed(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Store(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Field map carried by a validation error.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            AppError::Validation(fields) => Some(fields),
            _ => None,
        }
    }

    /// Body sent to clients; also the text behind save alerts. Does not log.
    pub fn into_body(self) -> ErrorResponse {
        let code = self.code();
        match self {
            AppError::Validation(fields) => ErrorResponse {
                error: format!("Validation failed: {}", summarize(&fields)),
                code,
                fields: Some(fields),
            },
            // Store failures surface with the raw store message
            AppError::Store(e) => ErrorResponse {
                error: e.to_string(),
                code,
                fields: None,
            },
            AppError::Internal(_) => ErrorResponse {
                error: "An internal error occurred".to_string(),
                code,
                fields: None,
            },
            other => ErrorResponse {
                error: other.to_string(),
                code,
                fields: None,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Store(e) => tracing::error!(error = ?e, "Store error"),
            AppError::Internal(msg) => tracing::error!("Internal error: {}", msg),
            _ => {}
        }

        let status = self.status();
        (status, Json(self.into_body())).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        AppError::Malformed(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
