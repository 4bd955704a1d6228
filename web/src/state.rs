//! Application state for Axum handlers.

use std::sync::Arc;
use todo_api_runtime::Store;
use todo_api_todo::{TodoReducer, TodoState};

/// The store holding the to-do list.
pub type TodoStore = Store<TodoReducer>;

/// Application state shared across all HTTP handlers.
///
/// Built once at startup; cloning only bumps the store's reference count.
#[derive(Clone)]
pub struct AppState {
    /// The single to-do list of this process
    pub store: Arc<TodoStore>,
}

impl AppState {
    /// Wrap an existing store.
    #[must_use]
    pub const fn new(store: Arc<TodoStore>) -> Self {
        Self { store }
    }

    /// State with a fresh, empty to-do list.
    #[must_use]
    pub fn empty() -> Self {
        let store = Store::new(TodoState::new(), TodoReducer::new()).with_name("todo_store");
        Self::new(Arc::new(store))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::empty()
    }
}
