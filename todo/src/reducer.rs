//! Reducer logic for the to-do list.
//!
//! Adds always succeed. Deletes remove the first equal item and are rejected
//! when nothing matches, leaving the list untouched.

use crate::types::{TodoAction, TodoItem, TodoState};
use thiserror::Error;
use todo_api_core::reducer::Reducer;

/// Reasons the reducer refuses an action
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// No item in the list is equal to the one requested for deletion
    #[error("Todo item {item} not found")]
    ItemNotFound {
        /// The item that was looked up
        item: TodoItem,
    },
}

/// Reducer for the to-do list
#[derive(Clone, Debug)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for TodoReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Error = TodoError;

    fn reduce(&self, state: &mut Self::State, action: Self::Action) -> Result<(), Self::Error> {
        match action {
            TodoAction::Add { item } => {
                state.items.push(item);
                Ok(())
            }

            TodoAction::Delete { item } => {
                let Some(index) = state.position(&item) else {
                    return Err(TodoError::ItemNotFound { item });
                };
                state.items.remove(index);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;
    use todo_api_testing::{ReducerTest, assertions};

    fn list(items: &[&str]) -> TodoState {
        items.iter().copied().collect()
    }

    #[test]
    fn test_add_to_empty_list() {
        ReducerTest::new(TodoReducer::new())
            .given_state(TodoState::new())
            .when_action(TodoAction::Add {
                item: "buy milk".into(),
            })
            .then_state(|state| {
                assert_eq!(state, &list(&["buy milk"]));
            })
            .then_result(assertions::assert_accepted)
            .run();
    }

    #[test]
    fn test_add_appends_at_end() {
        ReducerTest::new(TodoReducer::new())
            .given_state(list(&["buy milk"]))
            .when_action(TodoAction::Add {
                item: "walk dog".into(),
            })
            .then_state(|state| {
                assert_eq!(state, &list(&["buy milk", "walk dog"]));
            })
            .run();
    }

    #[test]
    fn test_add_keeps_duplicates() {
        ReducerTest::new(TodoReducer::new())
            .given_state(list(&["buy milk"]))
            .when_action(TodoAction::Add {
                item: "buy milk".into(),
            })
            .then_state(|state| {
                assert_eq!(state.count(), 2);
                assert_eq!(state, &list(&["buy milk", "buy milk"]));
            })
            .run();
    }

    #[test]
    fn test_add_accepts_non_string_values() {
        ReducerTest::new(TodoReducer::new())
            .given_state(TodoState::new())
            .when_action(TodoAction::Add {
                item: TodoItem::new(json!({"title": "buy milk", "done": false})),
            })
            .then_state(|state| {
                assert_eq!(
                    state.items[0].as_value(),
                    &json!({"title": "buy milk", "done": false})
                );
            })
            .run();
    }

    #[test]
    fn test_add_null() {
        ReducerTest::new(TodoReducer::new())
            .given_state(TodoState::new())
            .when_action(TodoAction::Add {
                item: TodoItem::new(serde_json::Value::Null),
            })
            .then_state(|state| {
                assert_eq!(serde_json::to_value(state).unwrap(), json!([null]));
            })
            .run();
    }

    #[test]
    fn test_delete_success() {
        ReducerTest::new(TodoReducer::new())
            .given_state(list(&["a", "b"]))
            .when_action(TodoAction::Delete { item: "a".into() })
            .then_state(|state| {
                assert_eq!(state, &list(&["b"]));
            })
            .then_result(assertions::assert_accepted)
            .run();
    }

    #[test]
    fn test_delete_removes_only_first_match() {
        ReducerTest::new(TodoReducer::new())
            .given_state(list(&["a", "b", "a"]))
            .when_action(TodoAction::Delete { item: "a".into() })
            .then_state(|state| {
                assert_eq!(state, &list(&["b", "a"]));
            })
            .run();
    }

    #[test]
    fn test_delete_not_found() {
        ReducerTest::new(TodoReducer::new())
            .given_state(list(&["a", "b"]))
            .when_action(TodoAction::Delete { item: "c".into() })
            .then_state(|state| {
                assert_eq!(state, &list(&["a", "b"]));
            })
            .then_result(|result| {
                assert_eq!(
                    result,
                    &Err(TodoError::ItemNotFound { item: "c".into() })
                );
            })
            .run();
    }

    #[test]
    fn test_delete_from_empty_list() {
        ReducerTest::new(TodoReducer::new())
            .given_state(TodoState::new())
            .when_action(TodoAction::Delete { item: "a".into() })
            .then_state(|state| assert!(state.is_empty()))
            .then_result(assertions::assert_rejected)
            .run();
    }

    #[test]
    fn test_delete_matches_structured_values() {
        let item = TodoItem::new(json!({"id": 1}));
        let other = TodoItem::new(json!({"id": 2}));

        ReducerTest::new(TodoReducer::new())
            .given_state(TodoState {
                items: vec![item.clone(), other.clone()],
            })
            .when_action(TodoAction::Delete { item })
            .then_state(move |state| {
                assert_eq!(state.items, vec![other]);
            })
            .run();
    }

    #[test]
    fn test_error_display() {
        let err = TodoError::ItemNotFound {
            item: "buy milk".into(),
        };
        assert_eq!(err.to_string(), "Todo item \"buy milk\" not found");
    }

    proptest! {
        #[test]
        fn adds_preserve_submission_order(values in proptest::collection::vec(".*", 0..32)) {
            let reducer = TodoReducer::new();
            let mut state = TodoState::new();

            for value in &values {
                let added = reducer.reduce(&mut state, TodoAction::Add { item: value.clone().into() });
                prop_assert!(added.is_ok());
            }

            let expected: TodoState = values.into_iter().collect();
            prop_assert_eq!(state, expected);
        }
    }
}
