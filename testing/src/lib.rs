//! # Todo API Testing
//!
//! Testing utilities and helpers for the Todo API.
//!
//! This crate provides:
//! - [`ReducerTest`]: Given/When/Then harness for reducers
//! - [`assertions`]: Outcome assertions for reducer results
//! - [`helpers::init_test_tracing`]: Log capture for async tests
//!
//! ## Example
//!
//! ```ignore
//! use todo_api_testing::{ReducerTest, assertions};
//!
//! ReducerTest::new(TodoReducer::new())
//!     .given_state(TodoState::new())
//!     .when_action(TodoAction::Add { item: "buy milk".into() })
//!     .then_state(|state| assert_eq!(state.count(), 1))
//!     .then_result(assertions::assert_accepted)
//!     .run();
//! ```


pub use reducer_test::{ReducerTest, assertions};

/// Test helpers and utilities
pub mod helpers {
    use tracing_subscriber::EnvFilter;

    /// Route `tracing` output through the test harness.
    ///
    /// Output is only shown for failing tests (or with `--nocapture`). The
    /// filter honours `RUST_LOG` and defaults to `debug`. Safe to call from
    /// every test: only the first call installs a subscriber.
    pub fn init_test_tracing() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::helpers::init_test_tracing;

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_test_tracing();
        init_test_tracing();
    }
}
