//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in ToolRent                               │
//! │                                                                         │
//! │  Handler  Result<Html<String>, ApiError>                               │
//! │     │                                                                   │
//! │     ├── ValidationError ──► VALIDATION_ERROR ──► 400                   │
//! │     ├── DbError::NotFound ─► NOT_FOUND ────────► 404                   │
//! │     ├── ConstraintViolation ► VALIDATION_ERROR ──► 400 (detail logged)  │
//! │     ├── DbError (other) ───► DATABASE_ERROR ───► 500 (detail logged)   │
//! │     └── askama::Error ─────► INTERNAL ─────────► 500 (detail logged)   │
//! │                                                                         │
//! │  Every error is rendered with the error.html view.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Serialize;
use tracing::error;

use crate::views::ErrorPage;
use toolrent_core::{CoreError, ValidationError};
use toolrent_db::DbError;

/// Error returned from HTTP handlers.
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable message, safe to show to the client
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (404)
    NotFound,

    /// Input validation failed (400)
    ValidationError,

    /// Database operation failed (500)
    DatabaseError,

    /// Internal server error (500)
    Internal,
}

impl ErrorCode {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
            ErrorCode::DatabaseError | ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for ApiError {}

/// Converts database errors to API errors.
///
/// Store detail is logged, never sent to the client.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => ApiError::not_found(&entity, &id),
            DbError::Domain(core) => core.into(),
            DbError::ConstraintViolation(message) => {
                error!(error = %message, "Store rejected write");
                ApiError::validation("The submitted data was rejected")
            }
            other => {
                error!(error = %other, "Database error");
                ApiError::new(ErrorCode::DatabaseError, "A database error occurred")
            }
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(v) => v.into(),
            CoreError::AmountOverflow(what) => {
                ApiError::validation(format!("The {} is too large", what))
            }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<askama::Error> for ApiError {
    fn from(err: askama::Error) -> Self {
        error!(error = %err, "Template rendering failed");
        ApiError::internal("Failed to render page")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.code.status();
        let page = ErrorPage {
            status: status.as_u16(),
            code: self.code.as_str(),
            message: &self.message,
        };

        match page.render() {
            Ok(body) => (status, Html(body)).into_response(),
            Err(e) => {
                error!(error = %e, "Error page failed to render");
                (status, self.message).into_response()
            }
        }
    }
}

/// Result type for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_not_found_maps_to_404() {
        let err: ApiError = DbError::not_found("Tool", 7).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.code.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message, "Tool not found: 7");
    }

    #[test]
    fn test_db_failures_hide_detail() {
        let err: ApiError = DbError::QueryFailed("no such table: tools".into()).into();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert!(!err.message.contains("tools"));
        assert_eq!(err.code.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_constraint_violation_maps_to_400_without_detail() {
        let err: ApiError =
            DbError::ConstraintViolation("CHECK constraint failed: daily_rate_cents >= 0".into())
                .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.code.status(), StatusCode::BAD_REQUEST);
        assert!(!err.message.contains("daily_rate_cents"));
    }

    #[test]
    fn test_validation_maps_to_400() {
        let err: ApiError = ValidationError::Required {
            field: "name".into(),
        }
        .into();
        assert_eq!(err.code.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "name is required");

        let err: ApiError = DbError::Domain(CoreError::AmountOverflow("rental total")).into();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_error_code_serializes_screaming() {
        let json = serde_json::to_string(&ErrorCode::ValidationError).unwrap();
        assert_eq!(json, "\"VALIDATION_ERROR\"");
    }
}
