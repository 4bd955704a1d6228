//! Custom Axum extractors.
//!
//! - `CorrelationId`: the request's correlation ID (set by the middleware,
//!   read from the header, or freshly generated)
//! - `ApiJson`: a JSON body extractor whose rejections are `AppError`s
//!
//! # Examples
//!
//! ```ignore
//! async fn handler(
//!     correlation_id: CorrelationId,
//!     ApiJson(request): ApiJson<TodoRequest>,
//! ) -> Result<Json<TodoState>, AppError> {
//!     tracing::info!(correlation_id = %correlation_id.0, "Processing request");
//!     ...
//! }
//! ```

use crate::error::AppError;
use crate::middleware::CORRELATION_ID_HEADER;
use axum::{
    Json, async_trait,
    extract::{FromRequest, FromRequestParts, Request, rejection::JsonRejection},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use uuid::Uuid;

/// Correlation ID for request tracing.
///
/// Prefers the ID stored by [`correlation_id`](crate::middleware::correlation_id),
/// then a valid UUID in the `X-Correlation-ID` header, then a new UUID v4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorrelationId(pub Uuid);

impl CorrelationId {
    /// Read the ID from request parts without consuming anything.
    #[must_use]
    pub fn from_parts(parts: &Parts) -> Self {
        if let Some(id) = parts.extensions.get::<Self>() {
            return *id;
        }

        let id = parts
            .headers
            .get(CORRELATION_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| Uuid::parse_str(s).ok())
            .unwrap_or_else(Uuid::new_v4);

        Self(id)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CorrelationId
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_parts(parts))
    }
}

/// JSON body extractor that rejects with [`AppError::malformed_request`].
///
/// Axum's `Json` answers 415/422 with a plain-text body; every body problem
/// here becomes a 400 with the standard JSON error shape instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(malformed(&rejection)),
        }
    }
}

fn malformed(rejection: &JsonRejection) -> AppError {
    AppError::malformed_request(rejection.body_text())
}
