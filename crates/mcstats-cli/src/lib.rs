// mcstats command-line interface
// Reports are printed to stdout; diagnostics go to stderr through tracing

mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod server;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
