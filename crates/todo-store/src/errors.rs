//! Error handling for todo-store
//!
//! Wraps todo-core TodoError with store-specific helpers

use todo_core::errors::{TodoError, TodoErrorKind};

/// Result type alias using TodoError
pub type Result<T> = std::result::Result<T, TodoError>;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> TodoError {
    TodoError::new(TodoErrorKind::Migration)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> TodoError {
    TodoError::new(TodoErrorKind::Migration)
        .with_op("migration_checksum")
        .with_message(format!(
            "Checksum mismatch for migration {}: recorded {}, embedded {}",
            migration_id, expected, actual
        ))
}

/// Create a configuration error for unusable database settings
pub fn invalid_settings(reason: impl Into<String>) -> TodoError {
    TodoError::new(TodoErrorKind::Configuration)
        .with_op("database_settings")
        .with_message(reason)
}

/// Create a database error from sqlx::Error
pub fn from_sqlx(op: &str, err: sqlx::Error) -> TodoError {
    TodoError::new(TodoErrorKind::Persistence)
        .with_op(op.to_string())
        .with_message(err.to_string())
}
