//! JSON API plus static dashboard files.
//!
//! Stats are computed on the blocking pool and cached by [`StatsService`],
//! so a request only pays for a scan when the cached result has expired.

mod error;
mod routes;

pub use error::ApiError;
pub use routes::create_router;

use mcstats_runtime::StatsService;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Bind `host:port` and serve until the process is stopped.
pub async fn run(service: Arc<StatsService>, host: &str, port: u16) -> anyhow::Result<()> {
    let listener = TcpListener::bind((host, port)).await?;
    info!(
        addr = %listener.local_addr()?,
        public_dir = %service.config().public_dir.display(),
        "serving stats"
    );

    axum::serve(listener, create_router(service)).await?;
    Ok(())
}
