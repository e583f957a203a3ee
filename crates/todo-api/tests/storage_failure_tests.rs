//! Envelope behaviour when the record store itself fails

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use todo_api::{codes, create_router, ApiSettings, AppState, Envelope};
use todo_core::{Todo, TodoDraft, TodoError, TodoErrorKind};
use todo_store::{Result, TodoRepository};

/// Repository whose database is always unreachable
struct UnreachableRepo;

fn unreachable() -> TodoError {
    TodoError::new(TodoErrorKind::Persistence).with_message("connection refused")
}

#[async_trait]
impl TodoRepository for UnreachableRepo {
    async fn add(&self, _draft: &TodoDraft) -> Result<Todo> {
        Err(unreachable())
    }

    async fn get(&self, _id: u64) -> Result<Todo> {
        Err(unreachable())
    }

    async fn list(&self, _status: u8) -> Result<Vec<Todo>> {
        Err(unreachable())
    }

    async fn update(&self, _id: u64, _draft: &TodoDraft) -> Result<Todo> {
        Err(unreachable())
    }

    async fn delete(&self, _id: u64) -> Result<()> {
        Err(unreachable())
    }
}

fn app(legacy_status_codes: bool) -> Router {
    let settings = ApiSettings {
        legacy_status_codes,
    };
    create_router(AppState::new(Arc::new(UnreachableRepo), &settings))
}

async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, Envelope) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"title": "x", "status": 1}"#))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_legacy_mutation_failures_answer_200() {
    let app = app(true);

    let cases = [
        (Method::POST, "/api/v1/todo", codes::ADD_FAILED),
        (Method::PUT, "/api/v1/todo/1", codes::UPDATE_FAILED),
        (Method::DELETE, "/api/v1/todo/1", codes::DELETE_FAILED),
    ];
    for (method, uri, code) in cases {
        let (http, envelope) = send(&app, method, uri).await;
        assert_eq!(http, StatusCode::OK);
        assert_eq!(envelope.status, code);
        assert_eq!(envelope.data, serde_json::json!(""));
    }
}

#[tokio::test]
async fn test_strict_mutation_failures_answer_500() {
    let app = app(false);

    let (http, envelope) = send(&app, Method::POST, "/api/v1/todo").await;

    assert_eq!(http, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(envelope.status, codes::ADD_FAILED);
}

#[tokio::test]
async fn test_read_failures_answer_500() {
    let app = app(true);

    for uri in ["/api/v1/todo/1", "/api/v1/todo?status=2"] {
        let (http, envelope) = send(&app, Method::GET, uri).await;
        assert_eq!(http, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(envelope.status, codes::STORAGE_FAILURE);
        assert_eq!(envelope.message, "storage error");
    }
}
