//! Common test utilities shared across integration tests.
//!
//! Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use mcstats_testing::TestWorld;
use std::path::Path;

/// Settings read from the environment that must not leak in from the host.
const ENV_OVERRIDES: &[&str] = &[
    "LEDGER_DB",
    "STATS_LIMIT",
    "LOGS_DIR",
    "LOG_STATS_LIMIT",
    "LEDGER_CACHE_TTL",
    "LOG_CACHE_TTL",
    "PUBLIC_DIR",
    "HOST",
    "PORT",
    "RUST_LOG",
];

/// `mcstats` running inside `world`, isolated from the user's config.
pub fn command(world: &TestWorld) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("mcstats");
    cmd.current_dir(world.root())
        .env("MCSTATS_CONFIG", world.root().join("config.toml"));
    for key in ENV_OVERRIDES {
        cmd.env_remove(key);
    }
    cmd
}

pub fn write_config(world: &TestWorld, content: &str) {
    std::fs::write(world.root().join("config.toml"), content).expect("Failed to write config");
}

pub fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
