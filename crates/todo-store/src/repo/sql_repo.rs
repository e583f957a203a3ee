//! SQL repository implementation
//!
//! One statement per intent against the `bb_todo` table. Placeholders are
//! `?`, which both MySQL and SQLite accept through the Any driver. Where the
//! Any driver hides a dialect difference badly (the id of an inserted row,
//! TEXT columns on MySQL) the repository branches on its `DbBackend`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::any::AnyRow;
use sqlx::AnyPool;
use sqlx::Row;
use todo_core::errors::RecordError;
use todo_core::{Todo, TodoDraft};

use crate::db::DbBackend;
use crate::errors::{from_sqlx, Result};
use crate::repo::TodoRepository;

const SELECT_COLUMNS: &str = "SELECT id, title, status, created_at, updated_at FROM bb_todo";
const INSERT_TODO: &str =
    "INSERT INTO bb_todo (title, status, created_at, updated_at) VALUES (?, ?, ?, ?)";

/// SQL-backed record store
///
/// Cloning is cheap: clones share the same pool.
#[derive(Debug, Clone)]
pub struct SqlTodoRepo {
    pool: AnyPool,
    backend: DbBackend,
}

impl SqlTodoRepo {
    /// `backend` must be the dialect the pool is connected to
    pub fn new(pool: AnyPool, backend: DbBackend) -> Self {
        Self { pool, backend }
    }

    /// Underlying pool, for lifecycle management by the owner
    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }

    /// Close the pool; pending operations finish first
    pub async fn close(&self) {
        self.pool.close().await;
    }

    async fn find(&self, id: u64) -> Result<Option<Todo>> {
        // Ids beyond the signed storage range can never have been assigned.
        let Some(db_id) = to_db_id(id) else {
            return Ok(None);
        };

        let row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(db_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| from_sqlx("todo_get", e))?;

        row.as_ref().map(row_to_todo).transpose()
    }

    /// Insert a row and return the id the database assigned to it
    async fn insert(&self, draft: &TodoDraft, now: i64) -> Result<i64> {
        match self.backend {
            // The SQLite Any driver never reports last_insert_id.
            DbBackend::Sqlite => {
                let row = sqlx::query(&format!("{INSERT_TODO} RETURNING id"))
                    .bind(draft.title.clone())
                    .bind(i64::from(draft.status))
                    .bind(now)
                    .bind(now)
                    .fetch_one(&self.pool)
                    .await
                    .map_err(|e| from_sqlx("todo_add", e))?;
                row.try_get::<i64, _>("id")
                    .map_err(|e| from_sqlx("todo_add", e))
            }
            DbBackend::MySql => {
                let result = sqlx::query(INSERT_TODO)
                    .bind(draft.title.clone())
                    .bind(i64::from(draft.status))
                    .bind(now)
                    .bind(now)
                    .execute(&self.pool)
                    .await
                    .map_err(|e| from_sqlx("todo_add", e))?;
                result.last_insert_id().ok_or_else(|| {
                    RecordError::Internal {
                        message: "database did not report the inserted id".to_string(),
                    }
                    .into()
                })
            }
        }
    }
}

#[async_trait]
impl TodoRepository for SqlTodoRepo {
    async fn add(&self, draft: &TodoDraft) -> Result<Todo> {
        let now = now_millis();
        let db_id = self.insert(draft, now).await?;
        tracing::debug!(todo_id = db_id, "todo row inserted");

        let timestamp = from_millis(db_id, now)?;
        Ok(Todo {
            id: from_db_id(db_id)?,
            title: draft.title.clone(),
            status: draft.status,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    async fn get(&self, id: u64) -> Result<Todo> {
        self.find(id)
            .await?
            .ok_or_else(|| RecordError::TodoNotFound { id }.into())
    }

    async fn list(&self, status: u8) -> Result<Vec<Todo>> {
        let rows = sqlx::query(&format!("{SELECT_COLUMNS} WHERE status = ? ORDER BY id ASC"))
            .bind(i64::from(status))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| from_sqlx("todo_list", e))?;

        tracing::debug!(status, rows = rows.len(), "todo rows listed");
        rows.iter().map(row_to_todo).collect()
    }

    async fn update(&self, id: u64, draft: &TodoDraft) -> Result<Todo> {
        let mut todo = self
            .find(id)
            .await?
            .ok_or(RecordError::TodoNotFound { id })?;

        let now = now_millis();
        let db_id = to_db_id(id).ok_or(RecordError::TodoNotFound { id })?;

        // Both columns are always written so zero values are never skipped.
        let result =
            sqlx::query("UPDATE bb_todo SET title = ?, status = ?, updated_at = ? WHERE id = ?")
                .bind(draft.title.clone())
                .bind(i64::from(draft.status))
                .bind(now)
                .bind(db_id)
                .execute(&self.pool)
                .await
                .map_err(|e| from_sqlx("todo_update", e))?;

        // MySQL connections count matched rows (FOUND_ROWS), so zero means
        // the row was deleted after the lookup above.
        if result.rows_affected() == 0 {
            return Err(RecordError::TodoNotFound { id }.into());
        }

        todo.apply(draft, from_millis(db_id, now)?);
        Ok(todo)
    }

    async fn delete(&self, id: u64) -> Result<()> {
        let db_id = to_db_id(id).ok_or(RecordError::TodoNotFound { id })?;

        let result = sqlx::query("DELETE FROM bb_todo WHERE id = ?")
            .bind(db_id)
            .execute(&self.pool)
            .await
            .map_err(|e| from_sqlx("todo_delete", e))?;

        if result.rows_affected() == 0 {
            return Err(RecordError::TodoNotFound { id }.into());
        }
        Ok(())
    }
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

fn to_db_id(id: u64) -> Option<i64> {
    i64::try_from(id).ok()
}

fn from_db_id(id: i64) -> Result<u64> {
    u64::try_from(id).map_err(|_| {
        RecordError::CorruptRow {
            id,
            reason: "negative id".to_string(),
        }
        .into()
    })
}

fn from_millis(id: i64, millis: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis).ok_or_else(|| {
        RecordError::CorruptRow {
            id,
            reason: format!("timestamp {} out of range", millis),
        }
        .into()
    })
}

fn row_to_todo(row: &AnyRow) -> Result<Todo> {
    let id: i64 = row.try_get("id").map_err(|e| from_sqlx("todo_decode", e))?;
    let title = decode_text(row, "title", id)?;
    let status: i64 = row
        .try_get("status")
        .map_err(|e| from_sqlx("todo_decode", e))?;
    let created_at: i64 = row
        .try_get("created_at")
        .map_err(|e| from_sqlx("todo_decode", e))?;
    let updated_at: i64 = row
        .try_get("updated_at")
        .map_err(|e| from_sqlx("todo_decode", e))?;

    let status = u8::try_from(status).map_err(|_| RecordError::CorruptRow {
        id,
        reason: format!("status {} outside 0..=255", status),
    })?;

    Ok(Todo {
        id: from_db_id(id)?,
        title,
        status,
        created_at: from_millis(id, created_at)?,
        updated_at: from_millis(id, updated_at)?,
    })
}

/// Read a text column that may arrive as text or as bytes
///
/// The MySQL Any driver reports TEXT columns as blobs, so both shapes are
/// accepted; bytes must be valid UTF-8.
fn decode_text(row: &AnyRow, column: &str, id: i64) -> Result<String> {
    match row.try_get::<String, _>(column) {
        Ok(text) => Ok(text),
        Err(sqlx::Error::ColumnDecode { .. }) => {
            let bytes: Vec<u8> = row
                .try_get(column)
                .map_err(|e| from_sqlx("todo_decode", e))?;
            String::from_utf8(bytes).map_err(|_| {
                RecordError::CorruptRow {
                    id,
                    reason: format!("{} is not valid UTF-8", column),
                }
                .into()
            })
        }
        Err(e) => Err(from_sqlx("todo_decode", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_id_conversion_bounds() {
        assert_eq!(to_db_id(42), Some(42));
        assert_eq!(to_db_id(u64::MAX), None);
        assert!(from_db_id(-5).is_err());
    }

    #[test]
    fn test_from_millis_round_trips() {
        let now = Utc::now().timestamp_millis();
        assert_eq!(from_millis(1, now).unwrap().timestamp_millis(), now);
        assert!(from_millis(1, i64::MAX).is_err());
    }
}
