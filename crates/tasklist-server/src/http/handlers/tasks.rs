//! Task CRUD handlers.
//!
//! Each handler follows the same pipeline: deserialize the payload,
//! validate it, hand it to the store, and map the outcome to an HTTP
//! status. Validation and existence checks resolve before any persistence
//! attempt, so a rejected request never leaves a partial write.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, info};

use tasklist_core::{validate_new, validate_update, FieldError, TaskId};

use crate::http::responses::{ErrorResponse, TaskPayload};
use crate::state::AppState;
use crate::store::StoreError;

/// Create a task. Any client-supplied id is discarded.
pub async fn create_task(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<TaskPayload>,
) -> Response {
    let task = payload.into_task();

    let failures = validate_new(&task);
    if !failures.is_empty() {
        return (StatusCode::BAD_REQUEST, Json(failures)).into_response();
    }

    match state.store.create(task) {
        Ok(created) => {
            info!(id = %created.id, "task created");
            (StatusCode::CREATED, Json(created)).into_response()
        }
        Err(e) => store_error_response(e),
    }
}

/// List all tasks.
pub async fn list_tasks(State(state): State<Arc<AppState>>) -> Response {
    match state.store.get_all() {
        Ok(tasks) => Json(tasks).into_response(),
        Err(e) => store_error_response(e),
    }
}

/// Fetch a single task by id.
pub async fn get_task(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    let id = TaskId::new(id);
    match state.store.get(&id) {
        Ok(Some(task)) => Json(task).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => store_error_response(e),
    }
}

/// Replace a task wholesale. The path id is authoritative: any id in the
/// body is overwritten before validation.
pub async fn update_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<TaskPayload>,
) -> Response {
    let task = payload.into_task_with_id(TaskId::new(id));

    let failures = validate_update(&task);
    if !failures.is_empty() {
        return (StatusCode::BAD_REQUEST, Json(failures)).into_response();
    }

    match state.store.update(task) {
        Ok(updated) => {
            info!(id = %updated.id, "task updated");
            Json(updated).into_response()
        }
        Err(e) => store_error_response(e),
    }
}

/// Delete a task by id.
pub async fn delete_task(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    let id = TaskId::new(id);
    match state.store.delete(&id) {
        Ok(()) => {
            info!(id = %id, "task deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => store_error_response(e),
    }
}

/// Map a store error to an HTTP response.
///
/// Domain outcomes keep their client-facing shape; infrastructure faults
/// are logged and collapse to a generic 500.
fn store_error_response(e: StoreError) -> Response {
    match e {
        StoreError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
        StoreError::DuplicateId(_) => (
            StatusCode::BAD_REQUEST,
            Json(vec![FieldError::new(
                "id",
                "A task with this id already exists",
            )]),
        )
            .into_response(),
        StoreError::Sql(_) | StoreError::Io(_) => {
            error!(error = %e, "store operation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "internal server error".to_string(),
                }),
            )
                .into_response()
        }
    }
}
