//! Error types for web handlers.
//!
//! This module bridges domain and runtime errors to HTTP responses,
//! implementing Axum's `IntoResponse` trait.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::fmt;
use todo_api_runtime::StoreError;
use todo_api_todo::TodoError;

/// Application error type for web handlers.
///
/// Every error leaves the server as `{"code": "...", "message": "..."}` with
/// a matching status. Server errors are logged; client errors are not.
///
/// # Examples
///
/// ```ignore
/// async fn handler(State(state): State<AppState>) -> Result<Json<TodoState>, AppError> {
///     let items = state.store.send_and_read(action, Clone::clone).await?;
///     Ok(Json(items))
/// }
/// ```
#[derive(Debug)]
pub struct AppError {
    /// HTTP status code
    status: StatusCode,
    /// Error message (user-facing)
    message: String,
    /// Error code (for client error handling)
    code: &'static str,
}

impl AppError {
    /// Create a new application error.
    #[must_use]
    pub const fn new(status: StatusCode, message: String, code: &'static str) -> Self {
        Self {
            status,
            message,
            code,
        }
    }

    /// 400: the body is missing, is not JSON, or lacks the `todo` field.
    #[must_use]
    pub fn malformed_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message.into(), "MALFORMED_REQUEST")
    }

    /// 404: no item in the list matches.
    #[must_use]
    pub fn item_not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message.into(), "ITEM_NOT_FOUND")
    }

    /// Create a 503 Service Unavailable error.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::SERVICE_UNAVAILABLE,
            message.into(),
            "SERVICE_UNAVAILABLE",
        )
    }

    /// HTTP status this error maps to
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Machine-readable error code
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.code
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}

/// Error response body (JSON).
#[derive(Debug, Serialize)]
struct ErrorResponse {
    /// Error code (for client error handling).
    code: &'static str,
    /// Human-readable error message.
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(
                status = %self.status,
                code = self.code,
                message = %self.message,
                "Server error"
            );
        } else {
            tracing::debug!(status = %self.status, code = self.code, "Request rejected");
        }

        let body = ErrorResponse {
            code: self.code,
            message: self.message,
        };

        (self.status, Json(body)).into_response()
    }
}

impl From<StoreError<TodoError>> for AppError {
    fn from(err: StoreError<TodoError>) -> Self {
        match err {
            StoreError::Rejected(rejection) => match rejection {
                TodoError::ItemNotFound { .. } => Self::item_not_found(rejection.to_string()),
            },
            StoreError::ShutdownInProgress => Self::unavailable("Store is shutting down"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::malformed_request("Invalid input");
        assert_eq!(err.to_string(), "[MALFORMED_REQUEST] Invalid input");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_item_not_found_from_store() {
        let err = AppError::from(StoreError::Rejected(TodoError::ItemNotFound {
            item: "buy milk".into(),
        }));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.code(), "ITEM_NOT_FOUND");
        assert_eq!(err.to_string(), "[ITEM_NOT_FOUND] Todo item \"buy milk\" not found");
    }

    #[test]
    fn test_shutdown_maps_to_unavailable() {
        let err = AppError::from(StoreError::<TodoError>::ShutdownInProgress);
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.code(), "SERVICE_UNAVAILABLE");
    }

    #[tokio::test]
    async fn test_unavailable_response_body() {
        let response = AppError::from(StoreError::<TodoError>::ShutdownInProgress).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap_or_default();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap_or_default();
        assert_eq!(body["code"], "SERVICE_UNAVAILABLE");
        assert_eq!(body["message"], "Store is shutting down");
    }

    #[tokio::test]
    async fn test_into_response_body() {
        let response = AppError::item_not_found("gone").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap_or_default();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap_or_default();
        assert_eq!(body["code"], "ITEM_NOT_FOUND");
        assert_eq!(body["message"], "gone");
    }
}
