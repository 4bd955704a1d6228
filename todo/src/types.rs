//! Domain types for the to-do list.
//!
//! A to-do list is an ordered sequence of opaque values. Nothing about an
//! item's shape is enforced: whatever JSON the client submitted is stored
//! and returned verbatim.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A single to-do item, exactly as submitted by the client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoItem(Value);

impl TodoItem {
    /// Wraps any JSON value as an item
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    /// Returns the underlying JSON value
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consumes the item, returning the JSON value
    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for TodoItem {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<&str> for TodoItem {
    fn from(value: &str) -> Self {
        Self(Value::String(value.to_string()))
    }
}

impl From<String> for TodoItem {
    fn from(value: String) -> Self {
        Self(Value::String(value))
    }
}

impl fmt::Display for TodoItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// State of the to-do list
///
/// Serializes as a bare JSON array so it can be returned to clients as is.
/// Insertion order is preserved and duplicates are allowed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoState {
    /// Items in insertion order
    pub items: Vec<TodoItem>,
}

impl TodoState {
    /// Creates a new empty list
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Returns the number of items
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the list holds no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Position of the first item equal to `item`
    #[must_use]
    pub fn position(&self, item: &TodoItem) -> Option<usize> {
        self.items.iter().position(|candidate| candidate == item)
    }
}

impl<I> FromIterator<I> for TodoState
where
    I: Into<TodoItem>,
{
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Actions accepted by the to-do reducer
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TodoAction {
    /// Append an item to the end of the list
    Add {
        /// Item to append
        item: TodoItem,
    },

    /// Remove the first item equal to the given one
    Delete {
        /// Item to remove
        item: TodoItem,
    },
}
