//! Migrate command
//!
//! Usage: todo migrate [--config <FILE>]

use std::path::PathBuf;

use clap::Args;
use todo_core::logging_facility;

use crate::config::Settings;

#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Configuration file (default: todo.toml, if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Execute migrate command
pub async fn execute(args: MigrateArgs) -> anyhow::Result<()> {
    let settings = Settings::load(args.config.as_deref())?;
    logging_facility::init(settings.logging.profile);

    let (pool, applied) = super::open_database(&settings.database).await?;
    pool.close().await;

    println!(
        "✓ Applied {} migration(s) to {}",
        applied,
        settings.database.describe()
    );

    Ok(())
}
