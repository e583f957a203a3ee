//! Lifecycle events emitted by the handlers

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use tower::ServiceExt;

use todo_api::{create_router, ApiSettings, AppState};
use todo_core::logging_facility::init_test_capture;
use todo_core_types::schema::{event, field};
use todo_store::{db, migrations, DatabaseSettings, DbBackend, SqlTodoRepo};
use tracing::Level;

#[tokio::test]
async fn test_handlers_log_start_end_and_errors() {
    let capture = init_test_capture();

    let pool = db::connect(&DatabaseSettings::sqlite_in_memory())
        .await
        .unwrap();
    migrations::apply_migrations(&pool, DbBackend::Sqlite)
        .await
        .unwrap();
    let app = create_router(AppState::new(
        Arc::new(SqlTodoRepo::new(pool, DbBackend::Sqlite)),
        &ApiSettings::default(),
    ));

    let add = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/todo")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"title": "x", "status": 1}"#))
        .unwrap();
    let response = app.clone().oneshot(add).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let get = Request::builder()
        .uri("/api/v1/todo/9999")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(get).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    capture.assert_event_exists("todo_add", event::START);
    capture.assert_event_exists("todo_add", event::END);
    capture.assert_event_exists("todo_get", event::START);

    let missing = capture
        .find("todo_get", event::END_ERROR)
        .expect("todo_get error event");
    assert_eq!(missing.level, Level::WARN);
    assert_eq!(missing.field(field::ERR_CODE), Some("ERR_NOT_FOUND"));
    assert_eq!(missing.field(field::TODO_ID), Some("9999"));

    let started = capture.find("todo_get", event::START).expect("todo_get start event");
    assert_eq!(started.field(field::TODO_ID), Some("9999"));
    let add_start = capture.find("todo_add", event::START).expect("todo_add start event");
    assert_eq!(add_start.field(field::TODO_ID), None);

    let completed = capture
        .events()
        .into_iter()
        .filter(|e| e.fields.contains_key(field::HTTP_STATUS))
        .count();
    assert_eq!(completed, 2);
}
