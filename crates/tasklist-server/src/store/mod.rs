//! SQLite-backed task store.
//!
//! The store owns no live connection: it keeps only the database path and
//! opens a fresh connection per operation. Every operation is a single
//! statement against a single row, so no multi-row transactions are needed;
//! concurrent writers to the same id resolve last-writer-wins under
//! SQLite's own row guarantees.

mod error;

pub use error::StoreError;

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::debug;

use tasklist_core::{Task, TaskId};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id            TEXT PRIMARY KEY,
    title         TEXT NOT NULL,
    details       TEXT NOT NULL,
    author        TEXT NOT NULL,
    started       TEXT NOT NULL,
    completed     TEXT NOT NULL,
    last_modified TEXT NOT NULL
)";

/// SQLite-backed task store.
#[derive(Debug, Clone)]
pub struct SqliteTaskStore {
    db_path: PathBuf,
}

impl SqliteTaskStore {
    /// Open the store, creating the database file and schema if absent.
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let db_path = db_path.as_ref().to_path_buf();
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let store = Self { db_path };
        let conn = store.connect()?;
        conn.execute(SCHEMA, [])?;
        debug!(db_path = %store.db_path.display(), "task store ready");
        Ok(store)
    }

    fn connect(&self) -> Result<Connection, StoreError> {
        let conn = Connection::open(&self.db_path)?;
        conn.busy_timeout(Duration::from_secs(5))?;
        Ok(conn)
    }

    /// Insert a new task.
    ///
    /// The caller's `id` and `last_modified` are discarded: a fresh random
    /// id is generated and `last_modified` is set to now. The generated id
    /// is collision-checked against existing rows; on the astronomically
    /// unlikely collision the insert fails with [`StoreError::DuplicateId`]
    /// instead of overwriting.
    pub fn create(&self, mut task: Task) -> Result<Task, StoreError> {
        task.id = TaskId::generate();
        task.last_modified = Utc::now();

        if self.get(&task.id)?.is_some() {
            return Err(StoreError::DuplicateId(task.id));
        }

        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO tasks (id, title, details, author, started, completed, last_modified) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                task.id.as_str(),
                task.title,
                task.details,
                task.author,
                task.started.to_rfc3339(),
                task.completed.to_rfc3339(),
                task.last_modified.to_rfc3339(),
            ],
        )?;
        Ok(task)
    }

    /// Fetch a task by id. Absence is not an error.
    pub fn get(&self, id: &TaskId) -> Result<Option<Task>, StoreError> {
        let conn = self.connect()?;
        let task = conn
            .query_row(
                "SELECT id, title, details, author, started, completed, last_modified \
                 FROM tasks WHERE id = ?1",
                params![id.as_str()],
                task_from_row,
            )
            .optional()?;
        Ok(task)
    }

    /// Fetch all tasks. No ordering is guaranteed.
    pub fn get_all(&self) -> Result<Vec<Task>, StoreError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT id, title, details, author, started, completed, last_modified FROM tasks",
        )?;
        let tasks = stmt
            .query_map([], task_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(tasks)
    }

    /// Replace an existing task wholesale.
    ///
    /// Requires a row with the task's id to already exist; refreshes
    /// `last_modified` and overwrites every other field.
    pub fn update(&self, mut task: Task) -> Result<Task, StoreError> {
        task.last_modified = Utc::now();

        let conn = self.connect()?;
        let changed = conn.execute(
            "UPDATE tasks SET title = ?2, details = ?3, author = ?4, \
             started = ?5, completed = ?6, last_modified = ?7 WHERE id = ?1",
            params![
                task.id.as_str(),
                task.title,
                task.details,
                task.author,
                task.started.to_rfc3339(),
                task.completed.to_rfc3339(),
                task.last_modified.to_rfc3339(),
            ],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound(task.id));
        }
        Ok(task)
    }

    /// Delete a task by id. Reports whether a row was actually removed.
    pub fn delete(&self, id: &TaskId) -> Result<(), StoreError> {
        let conn = self.connect()?;
        let removed = conn.execute("DELETE FROM tasks WHERE id = ?1", params![id.as_str()])?;
        if removed == 0 {
            return Err(StoreError::NotFound(id.clone()));
        }
        Ok(())
    }
}

fn task_from_row(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: TaskId::new(row.get::<_, String>(0)?),
        title: row.get(1)?,
        details: row.get(2)?,
        author: row.get(3)?,
        started: timestamp_column(row, 4)?,
        completed: timestamp_column(row, 5)?,
        last_modified: timestamp_column(row, 6)?,
    })
}

fn timestamp_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let raw: String = row.get(idx)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
        })
}
