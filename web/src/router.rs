//! Router configuration for the to-do service.

use crate::{
    cors::CorsConfig,
    handlers::{health, pages, todos},
    middleware::correlation_id,
    state::AppState,
};
use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Build the complete Axum router.
///
/// - `/health`, `/health/ready`: liveness and readiness, no CORS
/// - `/api/hello`, `/api/header`: static HTML fragments
/// - `/api/todo`, `/api/todo/delete`: the to-do list
///
/// Only the `/api` routes get the CORS layer. Every route is traced and
/// tagged with a correlation ID.
pub fn build_router(state: AppState, cors: &CorsConfig) -> Router {
    let api_routes = Router::new()
        .route("/hello", get(pages::hello))
        .route("/header", get(pages::header))
        .route("/todo", get(todos::list_todos).post(todos::add_todo))
        .route("/todo/delete", post(todos::delete_todo))
        .layer(cors.layer());

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .nest("/api", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(correlation_id))
                .layer(TraceLayer::new_for_http()),
        )
        .with_state(state)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode, header},
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let app = build_router(AppState::empty(), &CorsConfig::permissive());

        let response = app
            .oneshot(Request::builder().uri("/api/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_wrong_method_is_rejected() {
        let app = build_router(AppState::empty(), &CorsConfig::permissive());

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::GET)
                    .uri("/api/todo/delete")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_restricted_origin_is_not_echoed_for_strangers() {
        let cors = CorsConfig::from_origins("https://app.example").unwrap();
        let app = build_router(AppState::empty(), &cors);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/todo")
                    .header(header::ORIGIN, "https://evil.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[tokio::test]
    async fn test_restricted_origin_is_echoed_for_listed_origin() {
        let cors = CorsConfig::from_origins("https://app.example").unwrap();
        let app = build_router(AppState::empty(), &cors);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/todo")
                    .header(header::ORIGIN, "https://app.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "https://app.example"
        );
    }
}
