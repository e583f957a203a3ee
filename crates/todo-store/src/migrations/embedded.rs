//! Embedded SQL migrations
//!
//! Migrations are embedded at compile time using include_str!

use crate::db::DbBackend;

/// Migration metadata
pub struct Migration {
    pub id: &'static str,
    pub sql: &'static str,
}

/// Get all embedded migrations for a backend, in order
pub fn get_migrations(backend: DbBackend) -> Vec<Migration> {
    match backend {
        DbBackend::Sqlite => vec![Migration {
            id: "001_create_todos",
            sql: include_str!("../../migrations/sqlite/001_create_todos.sql"),
        }],
        DbBackend::MySql => vec![Migration {
            id: "001_create_todos",
            sql: include_str!("../../migrations/mysql/001_create_todos.sql"),
        }],
    }
}
