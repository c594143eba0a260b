//! Testing infrastructure for mcstats integration tests.
//!
//! - `TestWorld`: isolated temp directory with a logs folder and ledger path
//! - `ledger`: builds a Ledger-schema SQLite file and inserts actions
//! - `logs`: sample log text and plain/gzip log writers

pub mod ledger;
pub mod logs;
pub mod world;

pub use ledger::LedgerFixture;
pub use world::TestWorld;
