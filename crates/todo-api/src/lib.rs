//! Todo API - HTTP handler layer
//!
//! Exposes the record store under `/api/v1` with a uniform JSON envelope:
//! `{"status": <business code>, "message": <text>, "data": <payload or "">}`.

pub mod envelope;
pub mod failure;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod settings;
pub mod state;

use std::future::Future;
use tokio::net::TcpListener;

pub use envelope::{codes, Envelope, Reply};
pub use failure::{ApiFailure, StatusPolicy, TodoOp};
pub use router::{create_router, API_PREFIX};
pub use settings::ApiSettings;
pub use state::AppState;

/// Serve the API on an already bound listener until `shutdown` resolves
///
/// In-flight requests are drained before this returns.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = create_router(state);

    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, prefix = API_PREFIX, "todo api listening");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}
