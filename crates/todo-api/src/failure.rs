//! Mapping of record store errors onto HTTP replies

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use todo_core::errors::RecordError;
use todo_core::{TodoError, TodoErrorKind};

use crate::envelope::{codes, Envelope, Reply};
use crate::settings::ApiSettings;

/// The operations exposed over HTTP
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoOp {
    Add,
    Get,
    List,
    Update,
    Delete,
}

impl TodoOp {
    /// Operation name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            TodoOp::Add => "todo_add",
            TodoOp::Get => "todo_get",
            TodoOp::List => "todo_list",
            TodoOp::Update => "todo_update",
            TodoOp::Delete => "todo_delete",
        }
    }

    fn is_mutation(&self) -> bool {
        matches!(self, TodoOp::Add | TodoOp::Update | TodoOp::Delete)
    }
}

/// How storage failures on mutations surface at the HTTP level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusPolicy {
    pub legacy_status_codes: bool,
}

impl Default for StatusPolicy {
    fn default() -> Self {
        Self::from(&ApiSettings::default())
    }
}

impl From<&ApiSettings> for StatusPolicy {
    fn from(settings: &ApiSettings) -> Self {
        Self {
            legacy_status_codes: settings.legacy_status_codes,
        }
    }
}

/// A failed operation, ready to be rendered as a reply
#[derive(Debug, Clone)]
pub struct ApiFailure {
    op: TodoOp,
    error: TodoError,
    policy: StatusPolicy,
}

impl ApiFailure {
    pub fn new(op: TodoOp, error: TodoError, policy: StatusPolicy) -> Self {
        Self { op, error, policy }
    }

    pub fn error(&self) -> &TodoError {
        &self.error
    }

    /// Reply for this failure
    ///
    /// | kind                  | HTTP                  | code           |
    /// |-----------------------|-----------------------|----------------|
    /// | NotFound, on a read   | 404                   | 5005           |
    /// | NotFound, on a write  | 200 (legacy) or 404   | 5005           |
    /// | InvalidInput          | 400                   | 4000           |
    /// | other, on a mutation  | 200 (legacy) or 500   | 5004/5006/5007 |
    /// | other, on a read      | 500                   | 5000           |
    pub fn reply(&self) -> Reply {
        match self.error.kind() {
            TodoErrorKind::NotFound => {
                // Legacy clients read the miss on update/delete from the code alone.
                let legacy_write =
                    self.policy.legacy_status_codes && matches!(self.op, TodoOp::Update | TodoOp::Delete);
                let http = if legacy_write {
                    StatusCode::OK
                } else {
                    StatusCode::NOT_FOUND
                };
                Reply::new(http, Envelope::empty(codes::NOT_FOUND, "record not found"))
            }
            TodoErrorKind::InvalidInput => Reply::new(
                StatusCode::BAD_REQUEST,
                Envelope::empty(
                    codes::MALFORMED_INPUT,
                    format!("malformed request: {}", self.error.message()),
                ),
            ),
            _ if self.op.is_mutation() => {
                let http = if self.policy.legacy_status_codes {
                    StatusCode::OK
                } else {
                    StatusCode::INTERNAL_SERVER_ERROR
                };
                let (code, message) = match self.op {
                    TodoOp::Add => (codes::ADD_FAILED, "add failed"),
                    TodoOp::Update => (codes::UPDATE_FAILED, "update failed"),
                    _ => (codes::DELETE_FAILED, "delete failed"),
                };
                Reply::new(http, Envelope::empty(code, message))
            }
            _ => Reply::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                Envelope::empty(codes::STORAGE_FAILURE, "storage error"),
            ),
        }
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        self.reply().into_response()
    }
}

/// Error for a request part that could not be coerced
pub fn malformed(reason: impl Into<String>) -> TodoError {
    RecordError::MalformedInput {
        reason: reason.into(),
    }
    .into()
}
