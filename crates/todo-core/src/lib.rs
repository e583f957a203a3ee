//! Todo Core - domain model, error facility and logging facility
//!
//! This crate provides the pieces every other layer of the todo service
//! shares:
//! - The `Todo` record and the `TodoDraft` payload used by add and update
//! - The structured error facility (`TodoError`, `TodoErrorKind`)
//! - The logging facility (`init`, `log_op_*` macros, test capture)

pub mod errors;
pub mod logging_facility;
pub mod model;

// Re-export commonly used types
pub use errors::{RecordError, Result, TodoError, TodoErrorKind};
pub use model::{Todo, TodoDraft, DEFAULT_LIST_STATUS};
