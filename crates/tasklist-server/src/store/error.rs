//! Task store errors.

use tasklist_core::TaskId;
use thiserror::Error;

/// Errors produced by the task store.
///
/// `NotFound` and `DuplicateId` are domain outcomes the HTTP layer maps to
/// 404/400; everything else is an infrastructure fault and surfaces as a
/// generic server error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No row with the given id.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// A freshly generated id collided with an existing row.
    #[error("a task with id '{0}' already exists")]
    DuplicateId(TaskId),

    /// SQLite-level failure.
    #[error("sqlite: {0}")]
    Sql(#[from] rusqlite::Error),

    /// Filesystem failure while preparing the database location.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
