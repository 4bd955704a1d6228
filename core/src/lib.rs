//! # Todo API Core
//!
//! The functional seam of the Todo API: a [`Reducer`](reducer::Reducer)
//! turns `(State, Action)` into an updated state or a rejection.
//!
//! The HTTP shell never mutates state directly. It builds an action from the
//! request, hands it to the runtime `Store`, and maps the outcome to a response.
//!
//! ## Example
//!
//! ```
//! use todo_api_core::reducer::Reducer;
//!
//! struct CounterReducer;
//!
//! enum CounterAction {
//!     Increment,
//!     Decrement,
//! }
//!
//! impl Reducer for CounterReducer {
//!     type State = u32;
//!     type Action = CounterAction;
//!     type Error = &'static str;
//!
//!     fn reduce(&self, state: &mut u32, action: CounterAction) -> Result<(), Self::Error> {
//!         match action {
//!             CounterAction::Increment => *state += 1,
//!             CounterAction::Decrement => {
//!                 *state = state.checked_sub(1).ok_or("counter is already zero")?;
//!             }
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let mut count = 0;
//! assert!(CounterReducer.reduce(&mut count, CounterAction::Increment).is_ok());
//! assert_eq!(count, 1);
//! ```

/// Reducer module - the core trait for business logic
pub mod reducer {
    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Error`: Why an action was refused
    ///
    /// A rejected action must leave `state` exactly as it found it; the
    /// runtime relies on this to answer "unchanged" without snapshotting.
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The rejection type returned for actions that cannot be applied
        type Error;

        /// Reduce an action into a state change
        ///
        /// This is a pure function that:
        /// 1. Validates the action against current state
        /// 2. Updates state in place
        ///
        /// # Errors
        ///
        /// Returns `Self::Error` when the action cannot be applied. State is
        /// left untouched in that case.
        fn reduce(&self, state: &mut Self::State, action: Self::Action) -> Result<(), Self::Error>;
    }
}

pub use reducer::Reducer;
