// Runtime layer
// Configuration plus the TTL-cached stats service consumed by the CLI and HTTP server

pub mod cache;
pub mod config;
pub mod error;
pub mod service;

pub use cache::StatsCache;
pub use config::Config;
pub use error::{Error, Result};
pub use service::StatsService;
