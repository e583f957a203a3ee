pub mod migrate;
pub mod serve;

use anyhow::Context;
use todo_store::db::{self, AnyPool};
use todo_store::{migrations, DatabaseSettings};

/// Open the pool and bring the schema up to date
///
/// Returns the pool together with the number of migrations applied.
async fn open_database(settings: &DatabaseSettings) -> anyhow::Result<(AnyPool, usize)> {
    let backend = settings.resolved_backend()?;

    let pool = db::connect(settings)
        .await
        .with_context(|| format!("cannot connect to {}", settings.describe()))?;

    match migrations::apply_migrations(&pool, backend).await {
        Ok(applied) => {
            tracing::info!(applied, "schema up to date");
            Ok((pool, applied))
        }
        Err(e) => {
            pool.close().await;
            Err(e).context("schema migration failed")
        }
    }
}
