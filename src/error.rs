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

/// Application-wide error type.
///
/// # Error Categories
///
/// - **Repository Errors**: lookups, inserts and updates against the business store
/// - **Headline Errors**: a headline could not be resolved or persisted
/// - **Validation Errors**: invalid request data, rejected before the orchestrator
/// - **State Errors**: an operation that needs a displayed profile was issued without one
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Reading from the repository failed.
    #[error("Lookup failed: {0}")]
    Lookup(#[source] sqlx::Error),

    /// Inserting a business or headline failed.
    #[error("Insert failed: {0}")]
    Insert(#[source] sqlx::Error),

    /// Deactivating prior headlines failed.
    #[error("Update failed: {0}")]
    Update(#[source] sqlx::Error),

    /// A headline could not be generated or stored for a business.
    ///
    /// The String carries the underlying failure for logging.
    #[error("Headline generation failed: {0}")]
    HeadlineGeneration(String),

    /// Raw database error outside a repository operation (e.g. health ping).
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Request body or parameters are invalid.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Invalid request")]
    InvalidRequest(String),

    /// Regeneration was requested while no profile is displayed.
    ///
    /// Returns HTTP 409 Conflict.
    #[error("No business profile is currently displayed")]
    NoActiveProfile,
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
///
/// Repository and headline failures map to 500 and hide their details from the client.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::InvalidRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request", msg.clone())
            }
            AppError::NoActiveProfile => {
                (StatusCode::CONFLICT, "no_active_profile", self.to_string())
            }
            AppError::Lookup(_)
            | AppError::Insert(_)
            | AppError::Update(_)
            | AppError::HeadlineGeneration(_)
            | AppError::Database(_) => {
                tracing::error!(error = %self, "Request failed");
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
    fn status_codes_follow_error_kind() {
        assert_eq!(
            AppError::InvalidRequest("name is required".into())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NoActiveProfile.into_response().status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::Lookup(sqlx::Error::RowNotFound)
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::HeadlineGeneration("template pool unavailable".into())
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
