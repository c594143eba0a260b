use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use std::time::Duration;

use crate::records::LedgerStats;
use crate::{Error, Result, queries};

/// Default leaderboard length for ledger stats.
pub const DEFAULT_LIMIT: usize = 10;

// The mod keeps writing while we read
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Read-only handle on a Ledger database.
pub struct Ledger {
    conn: Connection,
}

impl Ledger {
    pub fn open(db_path: &Path) -> Result<Self> {
        if !db_path.exists() {
            return Err(Error::MissingDatabase(db_path.to_path_buf()));
        }

        let conn = Connection::open_with_flags(
            db_path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        conn.execute_batch("PRAGMA temp_store = MEMORY;")?;

        tracing::debug!(path = %db_path.display(), "opened ledger database");
        Ok(Self { conn })
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    pub fn load_stats(&self, limit: usize) -> Result<LedgerStats> {
        queries::load_stats(&self.conn, limit)
    }
}

/// Open `db_path` read-only and compute the full stats battery.
pub fn open_stats(db_path: &Path, limit: usize) -> Result<LedgerStats> {
    let ledger = Ledger::open(db_path)?;
    let stats = ledger.load_stats(limit)?;
    tracing::info!(
        path = %db_path.display(),
        total_actions = stats.total_actions,
        "computed ledger stats"
    );
    Ok(stats)
}
