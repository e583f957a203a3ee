use thiserror::Error;

/// Result type alias using the canonical TodoError
pub type Result<T> = std::result::Result<T, TodoError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code used in logs and tests. The HTTP
/// layer derives its envelope from the kind, never from the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoErrorKind {
    /// Request payload, path or query could not be coerced to the expected shape
    InvalidInput,
    /// No record matches the requested id
    NotFound,
    /// The database is unreachable or rejected a statement
    Persistence,
    /// A schema migration failed or was modified after being applied
    Migration,
    /// Settings could not be loaded or are inconsistent
    Configuration,
    Internal,
}

impl TodoErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            TodoErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            TodoErrorKind::NotFound => "ERR_NOT_FOUND",
            TodoErrorKind::Persistence => "ERR_PERSISTENCE",
            TodoErrorKind::Migration => "ERR_MIGRATION",
            TodoErrorKind::Configuration => "ERR_CONFIGURATION",
            TodoErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// The kind drives the HTTP mapping; op, entity id and message are context
/// for logs. The request id travels on the enclosing `request` span.
#[derive(Debug, Clone)]
pub struct TodoError {
    kind: TodoErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
}

impl TodoError {
    /// Create a new error with the specified kind
    pub fn new(kind: TodoErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> TodoErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == TodoErrorKind::NotFound
    }
}

impl std::fmt::Display for TodoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for TodoError {}

// ========== End Error Facility ==========

/// Domain failures raised while reading or writing todo records
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    /// No row carries this id
    #[error("Todo not found: {id}")]
    TodoNotFound { id: u64 },

    /// Request data could not be coerced to a todo payload
    #[error("Malformed input: {reason}")]
    MalformedInput { reason: String },

    /// A stored row holds values the model cannot represent
    #[error("Corrupt row for todo {id}: {reason}")]
    CorruptRow { id: i64, reason: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<RecordError> for TodoError {
    fn from(err: RecordError) -> Self {
        match err {
            RecordError::TodoNotFound { id } => TodoError::new(TodoErrorKind::NotFound)
                .with_entity_id(id.to_string())
                .with_message("record not found"),

            RecordError::MalformedInput { reason } => {
                TodoError::new(TodoErrorKind::InvalidInput).with_message(reason)
            }

            RecordError::CorruptRow { id, reason } => TodoError::new(TodoErrorKind::Persistence)
                .with_entity_id(id.to_string())
                .with_message(reason),

            RecordError::Internal { message } => {
                TodoError::new(TodoErrorKind::Internal).with_message(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_context() {
        let err = TodoError::new(TodoErrorKind::NotFound)
            .with_op("todo_get")
            .with_entity_id("42")
            .with_message("record not found");

        let rendered = err.to_string();
        assert_eq!(
            rendered,
            "[ERR_NOT_FOUND] in operation 'todo_get': record not found (entity_id: 42)"
        );
    }

    #[test]
    fn test_display_without_context() {
        let err = TodoError::new(TodoErrorKind::Internal);
        assert_eq!(err.to_string(), "[ERR_INTERNAL]");
    }
}
