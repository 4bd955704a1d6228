//! Health check endpoints.
//!
//! These endpoints are used by load balancers and monitoring systems
//! to verify service health. They live outside `/api` and carry no CORS
//! headers.

use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};
use todo_api_runtime::HealthCheck;
use todo_api_todo::TodoState;

/// Simple health check endpoint (for basic liveness).
///
/// ```text
/// GET /health
/// ```
#[allow(clippy::unused_async)]
pub async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}

/// Health check with Store diagnostics (for readiness).
///
/// # Status Codes
///
/// - 200 OK: the store accepts actions
/// - 503 Service Unavailable: the store is shutting down
///
/// ```text
/// GET /health/ready
/// ```
///
/// ```json
/// {
///   "component": "todo_store",
///   "status": "Healthy",
///   "message": null,
///   "metadata": { "actions_accepted": "2", "actions_rejected": "0", "items": "2" }
/// }
/// ```
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<HealthCheck>) {
    let items = state.store.state(TodoState::count).await;
    let health = state.store.health().with_metadata("items", items.to_string());

    let status = if health.status.is_unhealthy() {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    };

    (status, Json(health))
}
