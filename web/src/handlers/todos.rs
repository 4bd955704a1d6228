//! To-do list endpoints.
//!
//! ```text
//! GET  /api/todo          -> current list
//! POST /api/todo          {"todo": <value>} -> list after append
//! POST /api/todo/delete   {"todo": <value>} -> list after removing the first match
//! ```
//!
//! Each mutation and the snapshot returned for it happen under one store
//! lock, so the response shows exactly the effect of that request.

use crate::{
    WebResult,
    extractors::{ApiJson, CorrelationId},
    state::AppState,
};
use axum::{Json, extract::State};
use serde::Deserialize;
use todo_api_todo::{TodoAction, TodoItem, TodoState};

/// Body of both POST endpoints.
///
/// `todo` is required but may hold any JSON value, `null` included.
#[derive(Debug, Clone, Deserialize)]
pub struct TodoRequest {
    /// The item to add or remove
    pub todo: serde_json::Value,
}

impl TodoRequest {
    fn into_item(self) -> TodoItem {
        TodoItem::new(self.todo)
    }
}

/// `GET /api/todo`
pub async fn list_todos(State(state): State<AppState>) -> Json<TodoState> {
    Json(state.store.state(Clone::clone).await)
}

/// `POST /api/todo`
///
/// # Errors
///
/// - 400 `MALFORMED_REQUEST` if the body is not `{"todo": ...}`
/// - 503 `SERVICE_UNAVAILABLE` while shutting down
pub async fn add_todo(
    State(state): State<AppState>,
    correlation_id: CorrelationId,
    ApiJson(request): ApiJson<TodoRequest>,
) -> WebResult<Json<TodoState>> {
    let item = request.into_item();
    tracing::info!(correlation_id = %correlation_id.0, %item, "Adding todo");

    let todos = state
        .store
        .send_and_read(TodoAction::Add { item }, Clone::clone)
        .await?;

    Ok(Json(todos))
}

/// `POST /api/todo/delete`
///
/// # Errors
///
/// - 400 `MALFORMED_REQUEST` if the body is not `{"todo": ...}`
/// - 404 `ITEM_NOT_FOUND` if no item equals the given value; the list is unchanged
/// - 503 `SERVICE_UNAVAILABLE` while shutting down
pub async fn delete_todo(
    State(state): State<AppState>,
    correlation_id: CorrelationId,
    ApiJson(request): ApiJson<TodoRequest>,
) -> WebResult<Json<TodoState>> {
    let item = request.into_item();
    tracing::info!(correlation_id = %correlation_id.0, %item, "Deleting todo");

    let todos = state
        .store
        .send_and_read(TodoAction::Delete { item }, Clone::clone)
        .await?;

    Ok(Json(todos))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use serde_json::json;
    use uuid::Uuid;

    fn request(value: serde_json::Value) -> ApiJson<TodoRequest> {
        ApiJson(TodoRequest { todo: value })
    }

    fn cid() -> CorrelationId {
        CorrelationId(Uuid::new_v4())
    }

    #[tokio::test]
    async fn test_list_starts_empty() {
        let Json(todos) = list_todos(State(AppState::empty())).await;
        assert!(todos.is_empty());
    }

    #[tokio::test]
    async fn test_add_returns_updated_list() {
        let state = AppState::empty();

        let Json(todos) = add_todo(State(state.clone()), cid(), request(json!("buy milk")))
            .await
            .unwrap();

        assert_eq!(serde_json::to_value(&todos).unwrap(), json!(["buy milk"]));
    }

    #[tokio::test]
    async fn test_delete_missing_item_is_not_found() {
        let state = AppState::empty();
        add_todo(State(state.clone()), cid(), request(json!("a")))
            .await
            .unwrap();

        let err = delete_todo(State(state.clone()), cid(), request(json!("b")))
            .await
            .unwrap_err();

        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        let Json(todos) = list_todos(State(state)).await;
        assert_eq!(todos.count(), 1);
    }

    #[test]
    fn test_request_requires_todo_field() {
        assert!(serde_json::from_value::<TodoRequest>(json!({})).is_err());
        let explicit_null: TodoRequest = serde_json::from_value(json!({"todo": null})).unwrap();
        assert_eq!(explicit_null.todo, serde_json::Value::Null);
    }
}
