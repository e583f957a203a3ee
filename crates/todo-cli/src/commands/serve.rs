//! Serve command
//!
//! Usage: todo serve [--config <FILE>] [--host <HOST>] [--port <PORT>]

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Args;
use tokio::net::TcpListener;
use todo_api::AppState;
use todo_core::logging_facility;
use todo_store::SqlTodoRepo;

use crate::config::Settings;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Configuration file (default: todo.toml, if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Address to bind, overrides server.host
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind, overrides server.port
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Execute serve command
pub async fn execute(args: ServeArgs) -> anyhow::Result<()> {
    let mut settings = Settings::load(args.config.as_deref())?;
    if let Some(host) = args.host {
        settings.server.host = host;
    }
    if let Some(port) = args.port {
        settings.server.port = port;
    }

    logging_facility::init(settings.logging.profile);

    let backend = settings.database.resolved_backend()?;
    let (pool, _) = super::open_database(&settings.database).await?;
    let repo = SqlTodoRepo::new(pool, backend);
    let state = AppState::new(Arc::new(repo.clone()), &settings.api);

    let address = settings.server.address();
    let listener = match TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(e) => {
            repo.close().await;
            return Err(e).with_context(|| format!("cannot bind {}", address));
        }
    };

    let served = todo_api::serve(listener, state, shutdown_signal()).await;

    repo.close().await;
    tracing::info!("database pool closed");

    served.context("server error")
}

/// Resolves on Ctrl-C, or SIGTERM on unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "cannot listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received ctrl-c, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
