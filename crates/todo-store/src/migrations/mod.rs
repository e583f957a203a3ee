//! Schema migrations for `bb_todo`
//!
//! SQL lives in `migrations/<backend>/` and is compiled into the binary.
//! Applied ids and their checksums are recorded in `schema_version`.

mod checksums;
mod embedded;
mod runner;

pub use embedded::{get_migrations, Migration};
pub use runner::apply_migrations;
