//! Axum HTTP shell for the Todo API.
//!
//! Handlers are thin: they turn a request into a `TodoAction`, send it
//! through the shared `Store`, and map the outcome to a response.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         Imperative Shell (Axum)         │  ← HTTP, JSON, CORS
//! │  - Request parsing (ApiJson)            │  ← Correlation IDs, tracing
//! │  - Response serialization (AppError)    │
//! ├─────────────────────────────────────────┤
//! │         Store (runtime)                 │  ← One lock per action
//! ├─────────────────────────────────────────┤
//! │         TodoReducer (domain)            │  ← Pure list operations
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use todo_api_web::{AppState, CorsConfig, build_router};
//!
//! let app = build_router(AppState::empty(), &CorsConfig::permissive());
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:5000").await?;
//! axum::serve(listener, app).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cors;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

// Re-export key types for convenience
pub use cors::{AllowedOrigins, CorsConfig};
pub use error::AppError;
pub use extractors::{ApiJson, CorrelationId};
pub use middleware::{CORRELATION_ID_HEADER, correlation_id};
pub use router::build_router;
pub use state::{AppState, TodoStore};

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, AppError>;
