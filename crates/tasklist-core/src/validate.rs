//! Task validation.
//!
//! Pure and deterministic: a candidate task goes in, a list of field-level
//! failures comes out. An empty list means the task is valid. No I/O.

use crate::Task;
use serde::{Deserialize, Serialize};

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the offending field, as it appears on the wire.
    pub field: String,

    /// Human-readable description of the violation.
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validate a task about to be created.
///
/// Checks that `title`, `details` and `author` are non-empty after trimming.
/// The temporal ordering of `started`/`completed` is deliberately not
/// checked here; see [`validate_update`].
pub fn validate_new(task: &Task) -> Vec<FieldError> {
    required_text_fields(task)
}

/// Validate a task about to replace an existing record.
///
/// Applies the same text-field rules as [`validate_new`] plus the temporal
/// rule: `started` must be strictly earlier than `completed`. The ordering
/// rule applies only on the update path, so a task created with an
/// arbitrary pair of timestamps must be fixed up before its first update.
pub fn validate_update(task: &Task) -> Vec<FieldError> {
    let mut failures = required_text_fields(task);
    if task.started >= task.completed {
        failures.push(FieldError::new(
            "started",
            "'started' must be earlier than 'completed'",
        ));
    }
    failures
}

fn required_text_fields(task: &Task) -> Vec<FieldError> {
    let mut failures = Vec::new();
    for (field, value) in [
        ("title", &task.title),
        ("details", &task.details),
        ("author", &task.author),
    ] {
        if value.trim().is_empty() {
            failures.push(FieldError::new(field, format!("'{field}' must not be empty")));
        }
    }
    failures
}
