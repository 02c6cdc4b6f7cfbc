//! Shared application state.

use crate::store::SqliteTaskStore;

/// Shared application state.
///
/// The store keeps no live connection, so the state is immutable and safe
/// to share across request handlers behind an `Arc`.
pub struct AppState {
    /// The SQLite-backed task store.
    pub store: SqliteTaskStore,
}

impl AppState {
    /// Create application state around an opened store.
    pub fn new(store: SqliteTaskStore) -> Self {
        Self { store }
    }
}
