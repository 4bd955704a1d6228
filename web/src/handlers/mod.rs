//! HTTP request handlers.
//!
//! This module contains all HTTP handlers organized by concern.

pub mod health;
pub mod pages;
pub mod todos;

// Re-export common handler utilities
pub use health::{health_check, readiness_check};
pub use todos::TodoRequest;
