//! Record store for todo rows
//!
//! `TodoRepository` is the seam the HTTP layer depends on; `SqlTodoRepo`
//! implements it over a pooled database handle.

pub mod sql_repo;

use async_trait::async_trait;
use todo_core::{Todo, TodoDraft};

use crate::errors::Result;

pub use sql_repo::SqlTodoRepo;

/// The five CRUD intents over todo records
///
/// Every operation fails with `NotFound` when the id has no row and with
/// `Persistence` when the database cannot serve the request.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Insert a new record; storage assigns id and both timestamps
    async fn add(&self, draft: &TodoDraft) -> Result<Todo>;

    /// Fetch one record by id
    async fn get(&self, id: u64) -> Result<Todo>;

    /// All records with the given status, ascending by id
    async fn list(&self, status: u8) -> Result<Vec<Todo>>;

    /// Overwrite title and status unconditionally and refresh `updated_at`
    async fn update(&self, id: u64, draft: &TodoDraft) -> Result<Todo>;

    /// Remove the row permanently
    async fn delete(&self, id: u64) -> Result<()>;
}
