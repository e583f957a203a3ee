//! Todo Store - persistence layer over a relational database
//!
//! Provides:
//! - Connection settings and pool creation for MySQL and SQLite (`db`)
//! - Embedded, checksum-verified schema migrations (`migrations`)
//! - The record store: `TodoRepository` and its SQL implementation (`repo`)

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use db::{DatabaseSettings, DbBackend};
pub use errors::Result;
pub use repo::{SqlTodoRepo, TodoRepository};
