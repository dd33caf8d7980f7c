//! Unified error handling for the HTTP surface.
//!
//! Every failure a handler can hit is an [`AppError`]. Converting it into a
//! response always produces the same body shape: `{"error": "<message>"}`.
//!
//! Provider failures are not split by cause: a rejected
//! password, an unknown user and an unreachable provider all answer
//! `400 Bad Request` with the provider's message. The provider's error code
//! is kept on the value for logging.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    /// The identity provider rejected or failed the call
    #[error("{message}")]
    Provider {
        code: Option<String>,
        message: String,
    },

    /// The request could not be handled as sent
    #[error("{0}")]
    BadRequest(String),

    /// No route matches the request
    #[error("{0}")]
    NotFound(String),

    #[error("Internal server error")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

impl AppError {
    /// Get error code for logs
    pub fn code(&self) -> &str {
        match self {
            AppError::Provider {
                code: Some(code), ..
            } => code.as_str(),
            AppError::Provider { code: None, .. } => "PROVIDER_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Provider { .. } | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: self.user_message(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn provider(code: Option<String>, message: impl Into<String>) -> Self {
        AppError::Provider {
            code,
            message: message.into(),
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_provider_error_is_bad_request_with_message() {
        let error = AppError::provider(
            Some("NotAuthorizedException".to_string()),
            "Incorrect username or password.",
        );
        assert_eq!(error.code(), "NotAuthorizedException");

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "Incorrect username or password." })
        );
    }

    #[tokio::test]
    async fn test_provider_outage_is_still_bad_request() {
        let error = AppError::provider(None, "dispatch failure");
        assert_eq!(error.code(), "PROVIDER_ERROR");
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let response = AppError::internal("secret detail").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "An internal error occurred" })
        );
    }

    #[test]
    fn test_not_found_status() {
        let error = AppError::not_found("Cannot GET /nope");
        assert_eq!(error.status(), StatusCode::NOT_FOUND);
        assert_eq!(error.user_message(), "Cannot GET /nope");
    }
}
