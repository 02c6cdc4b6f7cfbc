//! End-to-end HTTP tests driving the router directly.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use tasklist_server::{http::create_router, AppState, SqliteTaskStore};

fn test_router() -> (TempDir, Router) {
    let dir = TempDir::new().expect("create temp dir");
    let store = SqliteTaskStore::open(dir.path().join("tasks.db")).expect("open store");
    let router = create_router(Arc::new(AppState::new(store)));
    (dir, router)
}

fn task_body(title: &str, details: &str, author: &str) -> Value {
    json!({
        "title": title,
        "details": details,
        "author": author,
        "started": "1970-01-01T00:00:00Z",
        "completed": "9999-12-31T23:59:59Z",
    })
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body is JSON")
}

async fn create_task(router: &Router, body: &Value) -> Value {
    let response = router
        .clone()
        .oneshot(json_request("POST", "/tasks", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    response_json(response).await
}

#[tokio::test]
async fn health_check_reports_ok() {
    let (_dir, router) = test_router();
    let response = router.oneshot(empty_request("GET", "/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn create_returns_201_with_server_assigned_fields() {
    let (_dir, router) = test_router();

    let mut body = task_body("Test Title", "Test Details", "M. Jordan");
    body["id"] = json!("client-chosen");

    let created = create_task(&router, &body).await;
    assert_ne!(created["id"], "");
    assert_ne!(created["id"], "client-chosen");
    assert!(created["lastModified"].is_string());
    assert_eq!(created["title"], "Test Title");
}

#[tokio::test]
async fn create_rejects_empty_fields_with_failure_list() {
    let (_dir, router) = test_router();

    let body = task_body("", "  ", "M. Jordan");
    let response = router
        .oneshot(json_request("POST", "/tasks", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let failures = response_json(response).await;
    let failures = failures.as_array().expect("failure list");
    assert_eq!(failures.len(), 2);
    assert_eq!(failures[0]["field"], "title");
    assert_eq!(failures[1]["field"], "details");
}

#[tokio::test]
async fn create_accepts_out_of_order_timestamps() {
    // Temporal ordering is only enforced on the update path; the create
    // path takes the timestamps as given. The split is deliberate, and
    // update_rejects_out_of_order_timestamps covers the other side.
    let (_dir, router) = test_router();

    let mut body = task_body("t", "d", "a");
    body["started"] = json!("2024-06-01T00:00:00Z");
    body["completed"] = json!("2024-01-01T00:00:00Z");

    let response = router
        .oneshot(json_request("POST", "/tasks", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn list_returns_all_created_tasks() {
    let (_dir, router) = test_router();

    for i in 0..3 {
        create_task(&router, &task_body(&format!("task {i}"), "d", "a")).await;
    }

    let response = router.oneshot(empty_request("GET", "/tasks")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let tasks = response_json(response).await;
    assert_eq!(tasks.as_array().expect("task array").len(), 3);
}

#[tokio::test]
async fn get_by_id_roundtrips_created_task() {
    let (_dir, router) = test_router();
    let created = create_task(&router, &task_body("Test Title", "Test Details", "M. Jordan")).await;
    let id = created["id"].as_str().unwrap();

    let response = router
        .oneshot(empty_request("GET", &format!("/tasks/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await, created);
}

#[tokio::test]
async fn get_unknown_id_is_404() {
    let (_dir, router) = test_router();
    let response = router
        .oneshot(empty_request("GET", "/tasks/unknown"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_replaces_task_and_keeps_path_identity() {
    let (_dir, router) = test_router();
    let created = create_task(&router, &task_body("before", "d", "a")).await;
    let id = created["id"].as_str().unwrap();

    // A mismatched body id is discarded in favor of the path id.
    let mut body = task_body("after", "d", "a");
    body["id"] = json!("some-other-id");

    let response = router
        .clone()
        .oneshot(json_request("PUT", &format!("/tasks/{id}"), &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = response_json(response).await;
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["title"], "after");

    let response = router
        .oneshot(empty_request("GET", &format!("/tasks/{id}")))
        .await
        .unwrap();
    let fetched = response_json(response).await;
    assert_eq!(fetched["title"], "after");
}

#[tokio::test]
async fn update_unknown_id_is_404_even_when_valid() {
    let (_dir, router) = test_router();
    let response = router
        .oneshot(json_request(
            "PUT",
            "/tasks/unknown",
            &task_body("t", "d", "a"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_rejects_empty_fields_with_failure_list() {
    let (_dir, router) = test_router();
    let created = create_task(&router, &task_body("t", "d", "a")).await;
    let id = created["id"].as_str().unwrap();

    let response = router
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/tasks/{id}"),
            &task_body("", "d", "a"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let failures = response_json(response).await;
    let failures = failures.as_array().expect("failure list");
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0]["field"], "title");

    // The rejected update must not have touched the stored row.
    let response = router
        .oneshot(empty_request("GET", &format!("/tasks/{id}")))
        .await
        .unwrap();
    let fetched = response_json(response).await;
    assert_eq!(fetched["title"], "t");
}

#[tokio::test]
async fn update_rejects_out_of_order_timestamps() {
    let (_dir, router) = test_router();
    let created = create_task(&router, &task_body("t", "d", "a")).await;
    let id = created["id"].as_str().unwrap();

    let mut body = task_body("t", "d", "a");
    body["started"] = json!("2024-06-01T00:00:00Z");
    body["completed"] = json!("2024-06-01T00:00:00Z");

    let response = router
        .oneshot(json_request("PUT", &format!("/tasks/{id}"), &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let failures = response_json(response).await;
    assert_eq!(failures[0]["field"], "started");
}

#[tokio::test]
async fn delete_removes_task_then_404s() {
    let (_dir, router) = test_router();
    let created = create_task(&router, &task_body("t", "d", "a")).await;
    let id = created["id"].as_str().unwrap();

    let response = router
        .clone()
        .oneshot(empty_request("DELETE", &format!("/tasks/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = router
        .clone()
        .oneshot(empty_request("DELETE", &format!("/tasks/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = router
        .oneshot(empty_request("GET", &format!("/tasks/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn identical_create_requests_yield_distinct_ids() {
    let (_dir, router) = test_router();
    let body = task_body("Test Title", "Test Details", "M. Jordan");

    let first = create_task(&router, &body).await;
    let second = create_task(&router, &body).await;
    assert_ne!(first["id"], second["id"]);
}
