use super::args::{Cli, Commands};
use super::handlers;
use crate::logging;
use anyhow::Result;
use mcstats_runtime::Config;

/// Flags override environment variables, which override the config file.
pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let mut config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Ledger { db, limit, format } => {
            let db_path = db.unwrap_or(config.ledger_db);
            handlers::ledger::handle(&db_path, limit.unwrap_or(config.stats_limit), format)
        }

        Commands::Logs {
            paths,
            limit,
            format,
        } => {
            let paths = if paths.is_empty() {
                vec![config.logs_dir]
            } else {
                paths
            };
            handlers::logs::handle(&paths, limit.unwrap_or(config.log_stats_limit), format)
        }

        Commands::Snapshot { src, dst } => handlers::snapshot::handle(&src, &dst),

        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            handlers::serve::handle(config)
        }
    }
}
