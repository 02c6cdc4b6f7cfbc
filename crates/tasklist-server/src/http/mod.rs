//! HTTP server for the task service.
//!
//! Provides endpoints for:
//! - Task CRUD (`/tasks`, `/tasks/:id`)
//! - Health check (`/health`)

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;

mod handlers;
pub mod responses;

/// Create the HTTP router.
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // API routes
        .route("/tasks", post(handlers::create_task).get(handlers::list_tasks))
        .route(
            "/tasks/:id",
            get(handlers::get_task)
                .put(handlers::update_task)
                .delete(handlers::delete_task),
        )
        // Observability routes
        .route("/health", get(handlers::health_check))
        .layer(cors)
        .with_state(state)
}
