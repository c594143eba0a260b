// Ledger statistics
// Read-only aggregation over the Ledger mod's action log; each query maps to a named row type

mod db;
mod error;
mod queries;
mod records;
mod snapshot;

// Public API
pub use db::{DEFAULT_LIMIT, Ledger, open_stats};
pub use error::{Error, Result};
pub use queries::load_stats;
pub use records::{
    ActionCount, BlockPlaced, BuilderRow, CauseEvents, Hotspot, HourlyActivity, LedgerStats,
    MobKills, PlayerActions, PlayerKills, WorldCount,
};
pub use snapshot::snapshot;
