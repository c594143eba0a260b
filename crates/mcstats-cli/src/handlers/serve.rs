use crate::server;
use anyhow::Result;
use mcstats_runtime::{Config, StatsService};
use std::sync::Arc;

pub fn handle(config: Config) -> Result<()> {
    let host = config.host.clone();
    let port = config.port;
    let service = Arc::new(StatsService::new(config));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(server::run(service, &host, port))
}
