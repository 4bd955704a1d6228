//! Axum middleware for request tracking.
//!
//! [`correlation_id`] gives every request a correlation ID:
//!
//! 1. **Extract** it from the `X-Correlation-ID` header (or generate a UUID v4)
//! 2. **Store** it in request extensions for the [`CorrelationId`] extractor
//! 3. **Run** the rest of the stack inside an `http_request` span carrying it
//! 4. **Echo** it back in the response `X-Correlation-ID` header
//!
//! ```ignore
//! let app = Router::new()
//!     .route("/api/todo", get(list_todos))
//!     .layer(axum::middleware::from_fn(correlation_id));
//! ```

use crate::extractors::CorrelationId;
use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use tracing::Instrument;

/// Header name for correlation ID.
pub const CORRELATION_ID_HEADER: &str = "X-Correlation-ID";

/// Correlation ID middleware, for use with `axum::middleware::from_fn`.
pub async fn correlation_id(req: Request, next: Next) -> Response {
    let (mut parts, body) = req.into_parts();
    let id = CorrelationId::from_parts(&parts);
    parts.extensions.insert(id);
    let req = Request::from_parts(parts, body);

    let span = tracing::info_span!(
        "http_request",
        correlation_id = %id.0,
        method = %req.method(),
        uri = %req.uri(),
    );

    let mut response = next.run(req).instrument(span).await;

    if let Ok(value) = HeaderValue::from_str(&id.0.to_string()) {
        response.headers_mut().insert(CORRELATION_ID_HEADER, value);
    }

    response
}
