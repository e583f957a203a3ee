//! HTTP handlers for the todo routes
//!
//! ## Logging Ownership
//!
//! Handlers own lifecycle logging for each record store operation:
//! `log_op_start!` at entry, `log_op_end!` on success, `log_op_error!` on
//! failure. The store only emits `tracing::debug!` details.

use std::future::Future;
use std::time::Instant;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use todo_core::{log_op_end, log_op_error, log_op_start};
use todo_core::{TodoDraft, TodoError, DEFAULT_LIST_STATUS};

use crate::envelope::{codes, Envelope, Reply};
use crate::failure::{malformed, ApiFailure, TodoOp};
use crate::state::AppState;

/// Query string of `GET /todo`
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub status: Option<String>,
}

/// Liveness greeting
pub async fn hello() -> Reply {
    Reply::ok(Envelope::empty(codes::OK, "hello Todo"))
}

/// `POST /todo`
pub async fn add_todo(
    State(state): State<AppState>,
    payload: Result<Json<TodoDraft>, JsonRejection>,
) -> Result<Reply, ApiFailure> {
    let todos = state.todos.clone();
    let todo = observed(TodoOp::Add, None, async move {
        let Json(draft) = payload.map_err(|r| malformed(r.body_text()))?;
        todos.add(&draft).await
    })
    .await
    .map_err(|e| ApiFailure::new(TodoOp::Add, e, state.policy))?;

    Ok(Reply::ok(Envelope::ok(&todo)))
}

/// `GET /todo/:id`
pub async fn get_todo(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Reply, ApiFailure> {
    let id = path_id(id).map_err(|e| ApiFailure::new(TodoOp::Get, e, state.policy))?;

    let todos = state.todos.clone();
    let todo = observed(TodoOp::Get, Some(id), async move { todos.get(id).await })
        .await
        .map_err(|e| ApiFailure::new(TodoOp::Get, e, state.policy))?;

    Ok(Reply::ok(Envelope::ok(&todo)))
}

/// `GET /todo?status=N`, N defaults to 1
pub async fn list_todos(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Reply, ApiFailure> {
    let status = params
        .map_err(|r| malformed(r.body_text()))
        .and_then(|Query(params)| parse_status(params.status.as_deref()))
        .map_err(|e| ApiFailure::new(TodoOp::List, e, state.policy))?;

    let todos = state.todos.clone();
    let list = observed(TodoOp::List, None, async move { todos.list(status).await })
        .await
        .map_err(|e| ApiFailure::new(TodoOp::List, e, state.policy))?;

    Ok(Reply::ok(Envelope::ok(&list)))
}

/// `PUT /todo/:id`, a full overwrite of title and status
pub async fn update_todo(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<TodoDraft>, JsonRejection>,
) -> Result<Reply, ApiFailure> {
    let id = path_id(id).map_err(|e| ApiFailure::new(TodoOp::Update, e, state.policy))?;

    let todos = state.todos.clone();
    let todo = observed(TodoOp::Update, Some(id), async move {
        let Json(draft) = payload.map_err(|r| malformed(r.body_text()))?;
        todos.update(id, &draft).await
    })
    .await
    .map_err(|e| ApiFailure::new(TodoOp::Update, e, state.policy))?;

    Ok(Reply::ok(Envelope::ok(&todo)))
}

/// `DELETE /todo/:id`
pub async fn delete_todo(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Reply, ApiFailure> {
    let id = path_id(id).map_err(|e| ApiFailure::new(TodoOp::Delete, e, state.policy))?;

    let todos = state.todos.clone();
    observed(TodoOp::Delete, Some(id), async move { todos.delete(id).await })
        .await
        .map_err(|e| ApiFailure::new(TodoOp::Delete, e, state.policy))?;

    Ok(Reply::ok(Envelope::empty(codes::OK, "delete success")))
}

/// Run one store operation between start/end log events
async fn observed<T, F>(op: TodoOp, todo_id: Option<u64>, operation: F) -> Result<T, TodoError>
where
    F: Future<Output = Result<T, TodoError>>,
{
    match todo_id {
        Some(id) => {
            log_op_start!(op.name(), todo_id = id);
        }
        None => {
            log_op_start!(op.name());
        }
    }
    let start = Instant::now();

    match operation.await {
        Ok(value) => {
            log_op_end!(op.name(), duration_ms = start.elapsed().as_millis() as u64);
            Ok(value)
        }
        Err(e) => {
            let duration_ms = start.elapsed().as_millis() as u64;
            match todo_id {
                Some(id) => {
                    log_op_error!(op.name(), e.clone(), duration_ms = duration_ms, todo_id = id);
                }
                None => {
                    log_op_error!(op.name(), e.clone(), duration_ms = duration_ms);
                }
            }
            Err(e)
        }
    }
}

fn path_id(id: Result<Path<u64>, PathRejection>) -> Result<u64, TodoError> {
    id.map(|Path(id)| id).map_err(|r| malformed(r.body_text()))
}

/// Parse the list filter; absent or blank means the default status
fn parse_status(raw: Option<&str>) -> Result<u8, TodoError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_LIST_STATUS),
        Some(value) => value.parse::<u8>().map_err(|_| {
            malformed(format!(
                "status must be an integer between 0 and 255, got '{}'",
                value
            ))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status_defaults() {
        assert_eq!(parse_status(None).unwrap(), 1);
        assert_eq!(parse_status(Some("")).unwrap(), 1);
        assert_eq!(parse_status(Some("  ")).unwrap(), 1);
    }

    #[test]
    fn test_parse_status_values() {
        assert_eq!(parse_status(Some("0")).unwrap(), 0);
        assert_eq!(parse_status(Some("255")).unwrap(), 255);
    }

    #[test]
    fn test_parse_status_rejects_garbage() {
        for raw in ["abc", "-1", "256", "1.5"] {
            let err = parse_status(Some(raw)).unwrap_err();
            assert_eq!(err.kind(), todo_core::TodoErrorKind::InvalidInput);
        }
    }
}
