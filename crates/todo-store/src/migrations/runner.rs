//! Migration runner
//!
//! Applies migrations with checksums and idempotency

use crate::db::DbBackend;
use crate::errors::{checksum_mismatch, from_sqlx, migration_error, Result};
use crate::migrations::checksums::migration_checksum;
use crate::migrations::embedded::get_migrations;
use sqlx::AnyPool;
use sqlx::Row;

/// Apply all pending migrations to the database
///
/// Returns the number of migrations applied by this call; zero when the
/// schema is already current. A previously applied migration whose SQL has
/// since changed is reported as an error and nothing further is applied.
pub async fn apply_migrations(pool: &AnyPool, backend: DbBackend) -> Result<usize> {
    create_schema_version_table(pool).await?;

    let mut applied = 0;
    for migration in get_migrations(backend) {
        if apply_migration(pool, migration.id, migration.sql).await? {
            applied += 1;
        }
    }

    Ok(applied)
}

/// Create the schema_version table if it doesn't exist
async fn create_schema_version_table(pool: &AnyPool) -> Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS schema_version (
            migration_id VARCHAR(128) NOT NULL PRIMARY KEY,
            applied_at BIGINT NOT NULL,
            checksum VARCHAR(64) NOT NULL
        )",
    )
    .execute(pool)
    .await
    .map_err(|e| from_sqlx("create_schema_version", e))?;

    Ok(())
}

/// Apply a single migration if not already applied
async fn apply_migration(pool: &AnyPool, migration_id: &str, sql: &'static str) -> Result<bool> {
    let checksum = migration_checksum(sql);

    let recorded = sqlx::query("SELECT checksum FROM schema_version WHERE migration_id = ?")
        .bind(migration_id.to_string())
        .fetch_optional(pool)
        .await
        .map_err(|e| from_sqlx("migration_lookup", e))?;

    if let Some(row) = recorded {
        let recorded: String = row
            .try_get("checksum")
            .map_err(|e| from_sqlx("migration_lookup", e))?;
        if recorded != checksum {
            return Err(checksum_mismatch(migration_id, &recorded, &checksum));
        }
        return Ok(false);
    }

    let mut tx = pool
        .begin()
        .await
        .map_err(|e| from_sqlx("migration_begin", e))?;

    // MySQL commits DDL implicitly; the transaction only guards the
    // bookkeeping row there.
    for statement in split_statements(sql) {
        sqlx::query(statement)
            .execute(&mut *tx)
            .await
            .map_err(|e| migration_error(migration_id, &e.to_string()))?;
    }

    let now = chrono::Utc::now().timestamp();
    sqlx::query("INSERT INTO schema_version (migration_id, applied_at, checksum) VALUES (?, ?, ?)")
        .bind(migration_id.to_string())
        .bind(now)
        .bind(checksum)
        .execute(&mut *tx)
        .await
        .map_err(|e| from_sqlx("migration_record", e))?;

    tx.commit()
        .await
        .map_err(|e| from_sqlx("migration_commit", e))?;

    tracing::debug!(migration_id, "migration applied");
    Ok(true)
}

/// Split a migration file into executable statements.
///
/// Full-line `--` comments are dropped; statements end at `;`.
fn split_statements(sql: &'static str) -> Vec<&'static str> {
    let mut statements = Vec::new();
    let mut start = 0;
    for (idx, ch) in sql.char_indices() {
        if ch == ';' {
            push_statement(&mut statements, &sql[start..idx]);
            start = idx + 1;
        }
    }
    push_statement(&mut statements, &sql[start..]);
    statements
}

fn push_statement(statements: &mut Vec<&'static str>, chunk: &'static str) {
    let body = strip_leading_comments(chunk).trim();
    if !body.is_empty() {
        statements.push(body);
    }
}

fn strip_leading_comments(chunk: &str) -> &str {
    let mut rest = chunk.trim_start();
    while rest.starts_with("--") {
        rest = match rest.find('\n') {
            Some(pos) => rest[pos + 1..].trim_start(),
            None => "",
        };
    }
    rest
}
