//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log operations.
//! Callers must depend on `todo-core-types` for the event name constants.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use todo_core::log_op_start;
/// log_op_start!("todo_add");
/// log_op_start!("todo_get", todo_id = 7u64);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = todo_core_types::schema::event::START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = todo_core_types::schema::event::START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use todo_core::log_op_end;
/// log_op_end!("todo_add", duration_ms = 42);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = todo_core_types::schema::event::END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = todo_core_types::schema::event::END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// Not-found outcomes are expected traffic and log at `warn`; everything
/// else logs at `error`.
///
/// # Example
///
/// ```
/// # use todo_core::{log_op_error, errors::RecordError};
/// let err = RecordError::TodoNotFound { id: 1 };
/// log_op_error!("todo_get", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        use $crate::errors::TodoError;
        let todo_err: TodoError = $err.into();
        if todo_err.is_not_found() {
            tracing::warn!(
                component = module_path!(),
                op = $op,
                event = todo_core_types::schema::event::END_ERROR,
                duration_ms = $duration,
                err.kind = ?todo_err.kind(),
                err.code = todo_err.code(),
            );
        } else {
            tracing::error!(
                component = module_path!(),
                op = $op,
                event = todo_core_types::schema::event::END_ERROR,
                duration_ms = $duration,
                err.kind = ?todo_err.kind(),
                err.code = todo_err.code(),
                err.message = todo_err.message(),
            );
        }
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::TodoError;
        let todo_err: TodoError = $err.into();
        if todo_err.is_not_found() {
            tracing::warn!(
                component = module_path!(),
                op = $op,
                event = todo_core_types::schema::event::END_ERROR,
                duration_ms = $duration,
                err.kind = ?todo_err.kind(),
                err.code = todo_err.code(),
                $($field)*
            );
        } else {
            tracing::error!(
                component = module_path!(),
                op = $op,
                event = todo_core_types::schema::event::END_ERROR,
                duration_ms = $duration,
                err.kind = ?todo_err.kind(),
                err.code = todo_err.code(),
                err.message = todo_err.message(),
                $($field)*
            );
        }
    }};
}
