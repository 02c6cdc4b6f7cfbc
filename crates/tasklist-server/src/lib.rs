//! Tasklist Server Library
//!
//! This crate provides the HTTP surface and SQLite-backed task store for
//! Tasklist: a request comes in, the payload is validated, the store
//! performs a single-row operation, and the result is mapped back to an
//! HTTP outcome.

pub mod config;
pub mod http;
pub mod state;
pub mod store;

pub use config::Config;
pub use state::AppState;
pub use store::SqliteTaskStore;
