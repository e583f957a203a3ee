//! Logging facility
//!
//! `init` installs the process subscriber for a [`Profile`]. Operation
//! boundaries are logged with `log_op_start!`, `log_op_end!` and
//! `log_op_error!`, which emit the fields named in
//! `todo_core_types::schema`. Tests swap the subscriber for an in-memory
//! capture with [`init_test_capture`].

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
