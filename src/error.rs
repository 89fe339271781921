//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Message returned when creating a voucher whose code is taken.
pub const VOUCHER_ALREADY_EXISTS: &str = "Voucher already exist.";

/// Message returned when applying a voucher code that is unknown.
pub const VOUCHER_DOES_NOT_EXIST: &str = "Voucher does not exist.";

/// Application-wide error type.
///
/// # Error Categories
///
/// - **Business Rule Errors**: duplicate or missing voucher (`Conflict`)
/// - **Resource Errors**: voucher lookup by code found nothing
/// - **Validation Errors**: invalid request data
/// - **Database Errors**: any sqlx::Error from database operations
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (e.g., connection error, query error).
    ///
    /// Returns HTTP 500; the underlying error is never shown to clients.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The operation violates a voucher business rule.
    ///
    /// Returns HTTP 409 Conflict with the carried message.
    #[error("{0}")]
    Conflict(String),

    /// Requested voucher does not exist.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Voucher not found")]
    VoucherNotFound,

    /// Request body or parameters are invalid.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Invalid request")]
    InvalidRequest(String),
}

impl AppError {
    pub fn conflict(message: impl Into<String>) -> Self {
        AppError::Conflict(message.into())
    }
}

/// Convert AppError into an HTTP response.
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `Conflict` → 409 Conflict
/// - `VoucherNotFound` → 404 Not Found
/// - `InvalidRequest` → 400 Bad Request
/// - `Database` → 500 Internal Server Error (hides details from client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Conflict(ref msg) => (StatusCode::CONFLICT, "conflict", msg.clone()),
            AppError::VoucherNotFound => {
                (StatusCode::NOT_FOUND, "voucher_not_found", self.to_string())
            }
            AppError::InvalidRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request", msg.clone())
            }
            AppError::Database(ref e) => {
                tracing::error!(error = %e, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_displays_its_message() {
        let err = AppError::conflict(VOUCHER_ALREADY_EXISTS);
        assert_eq!(err.to_string(), "Voucher already exist.");
    }

    #[test]
    fn status_codes_match_variants() {
        assert_eq!(
            AppError::conflict(VOUCHER_DOES_NOT_EXIST)
                .into_response()
                .status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::VoucherNotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::InvalidRequest("bad".into())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Database(sqlx::Error::RowNotFound)
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
