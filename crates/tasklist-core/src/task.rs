//! The Task entity.

use crate::TaskId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A Task is the single persisted entity: one todo item.
///
/// `id` and `last_modified` are server-assigned. `id` is generated by the
/// store at creation and immutable thereafter; `last_modified` is refreshed
/// by the store on every create/update and never client-controlled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique task identifier.
    pub id: TaskId,

    /// Short title of the task.
    pub title: String,

    /// Free-form description.
    pub details: String,

    /// Who the task belongs to.
    pub author: String,

    /// When work on the task started.
    pub started: DateTime<Utc>,

    /// When work on the task completed (or is due to complete).
    pub completed: DateTime<Utc>,

    /// Last time the record was written by the store.
    pub last_modified: DateTime<Utc>,
}

impl Task {
    /// Create a new Task with a generated id and `last_modified` set to now.
    pub fn new(
        title: impl Into<String>,
        details: impl Into<String>,
        author: impl Into<String>,
        started: DateTime<Utc>,
        completed: DateTime<Utc>,
    ) -> Self {
        Self {
            id: TaskId::generate(),
            title: title.into(),
            details: details.into(),
            author: author.into(),
            started,
            completed,
            last_modified: Utc::now(),
        }
    }

    /// Builder method to set a specific ID (useful for testing).
    pub fn with_id(mut self, id: TaskId) -> Self {
        self.id = id;
        self
    }
}
