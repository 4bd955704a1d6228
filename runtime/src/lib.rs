//! # Todo API Runtime
//!
//! Runtime implementation for the Todo API.
//!
//! This crate provides the [`Store`] that owns application state and runs
//! every action through a [`Reducer`](todo_api_core::Reducer) under a lock.
//!
//! ## Example
//!
//! ```ignore
//! use todo_api_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer);
//!
//! // Send an action
//! store.send(Action::DoSomething).await?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field).await;
//! ```

mod health;
pub mod store;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug)]
    pub enum StoreError<E> {
        /// The reducer refused the action; state is unchanged
        #[error("Action rejected: {0}")]
        Rejected(E),

        /// Store is shutting down and not accepting new actions
        #[error("Store is shutting down")]
        ShutdownInProgress,
    }
}

pub use error::StoreError;
pub use health::{HealthCheck, HealthStatus};
pub use store::Store;
