pub mod ledger;
pub mod logs;
pub mod serve;
pub mod snapshot;
