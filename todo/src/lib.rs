//! To-do list domain for the Todo API.
//!
//! The list is an ordered sequence of opaque JSON values. Two actions change
//! it:
//!
//! - `Add` appends an item (duplicates are kept)
//! - `Delete` removes the first equal item, or is rejected with
//!   [`TodoError::ItemNotFound`]
//!
//! # Quick Start
//!
//! ```
//! use todo_api_core::Reducer;
//! use todo_api_todo::{TodoAction, TodoReducer, TodoState};
//!
//! let reducer = TodoReducer::new();
//! let mut state = TodoState::new();
//!
//! reducer.reduce(&mut state, TodoAction::Add { item: "a".into() }).ok();
//! reducer.reduce(&mut state, TodoAction::Add { item: "b".into() }).ok();
//! reducer.reduce(&mut state, TodoAction::Delete { item: "a".into() }).ok();
//!
//! let expected: TodoState = ["b"].into_iter().collect();
//! assert_eq!(state, expected);
//! ```

pub mod reducer;
pub mod types;

pub use reducer::{TodoError, TodoReducer};
pub use types::{TodoAction, TodoItem, TodoState};
