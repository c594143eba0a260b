use mcstats_ledger::LedgerStats;
use mcstats_logs::{LogStats, ScanOptions};
use std::sync::Arc;

use crate::cache::StatsCache;
use crate::config::Config;
use crate::Result;

/// Cached access to both stats sources, created once per process.
pub struct StatsService {
    config: Config,
    ledger: StatsCache<LedgerStats>,
    logs: StatsCache<LogStats>,
}

impl StatsService {
    pub fn new(config: Config) -> Self {
        Self {
            ledger: StatsCache::new("ledger", config.ledger_ttl()),
            logs: StatsCache::new("logs", config.log_ttl()),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Ledger aggregates for the configured database.
    pub fn ledger_stats(&self) -> Result<Arc<LedgerStats>> {
        self.ledger.get_or_compute(|| {
            mcstats_ledger::open_stats(&self.config.ledger_db, self.config.stats_limit)
                .map_err(Into::into)
        })
    }

    /// Log aggregates for the configured logs directory.
    pub fn log_stats(&self) -> Result<Arc<LogStats>> {
        self.logs.get_or_compute(|| {
            let options = ScanOptions::new(self.config.log_stats_limit);
            mcstats_logs::collect_stats(&[&self.config.logs_dir], options).map_err(Into::into)
        })
    }

    /// Drop both cached results.
    pub fn invalidate(&self) {
        self.ledger.invalidate();
        self.logs.invalidate();
    }
}
