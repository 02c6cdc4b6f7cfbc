//! HTTP request and response types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tasklist_core::{Task, TaskId};

// ============================================================================
// Task types
// ============================================================================

/// Request body for create and update.
///
/// A previously fetched task can be sent straight back: `id` and
/// `lastModified` are server-assigned, so any values in the body are
/// ignored rather than rejected.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    pub title: String,
    pub details: String,
    pub author: String,
    pub started: DateTime<Utc>,
    pub completed: DateTime<Utc>,
}

impl TaskPayload {
    /// Build a domain task from the payload.
    ///
    /// The resulting task carries a placeholder id; the store (on create)
    /// or the path parameter (on update) decides the real identity.
    pub fn into_task(self) -> Task {
        Task::new(
            self.title,
            self.details,
            self.author,
            self.started,
            self.completed,
        )
    }

    /// Build a domain task addressed at an existing record.
    pub fn into_task_with_id(self, id: TaskId) -> Task {
        self.into_task().with_id(id)
    }
}

// ============================================================================
// Error types
// ============================================================================

/// Error response for infrastructure faults.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
