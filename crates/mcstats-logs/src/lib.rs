// Server log statistics
// Single pass over the log corpus: classify lines, track sessions, rank counters

mod classify;
mod corpus;
mod error;
mod event;
mod leaderboard;
mod tally;
mod tracker;

use chrono::NaiveDate;
use std::path::Path;

pub use classify::Classifier;
pub use corpus::{LogLines, LogSource, date_from_path, discover_sources};
pub use error::{Error, Result};
pub use event::LogEvent;
pub use leaderboard::{
    AdvancementRow, ChurnRow, DeathCauseRow, LogStats, PlayerDeathRow, PlaytimeRow,
    VillagerKillerRow,
};
pub use tally::Tally;
pub use tracker::{Aggregates, SHORT_SESSION_SECS, SessionTracker};

/// Default number of rows per log leaderboard.
pub const DEFAULT_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Rows kept per leaderboard.
    pub limit: usize,
    /// Day used for files whose name carries no date.
    pub fallback_date: NaiveDate,
}

impl ScanOptions {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            fallback_date: chrono::Local::now().date_naive(),
        }
    }

    pub fn with_fallback_date(mut self, date: NaiveDate) -> Self {
        self.fallback_date = date;
        self
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT)
    }
}

/// Scan log files and directories and build the log leaderboards.
///
/// Any I/O failure aborts the scan; no partial result is returned.
pub fn collect_stats<P: AsRef<Path>>(paths: &[P], options: ScanOptions) -> Result<LogStats> {
    let sources = discover_sources(paths)?;
    tracing::debug!(sources = sources.len(), "scanning server logs");

    let classifier = Classifier::new();
    let mut tracker = SessionTracker::new();
    let mut matched = 0usize;

    for source in &sources {
        let date = source.date.unwrap_or(options.fallback_date);
        for line in source.lines()? {
            if let Some(event) = classifier.classify(&line?, date) {
                tracker.apply(&event);
                matched += 1;
            }
        }
    }

    let totals = tracker.finish();
    tracing::info!(sources = sources.len(), matched, "log scan complete");

    Ok(LogStats::from_aggregates(&totals, options.limit))
}
