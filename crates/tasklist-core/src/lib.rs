//! Tasklist Core Domain Types
//!
//! This crate contains pure domain types with no dependencies on:
//! - Network/HTTP
//! - Database
//! - Runtime specifics
//!
//! All types here represent the core business domain of Tasklist.

pub mod ids;
pub mod task;
pub mod validate;

// Re-export commonly used types
pub use ids::TaskId;
pub use task::Task;
pub use validate::{validate_new, validate_update, FieldError};
