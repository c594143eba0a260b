// Report rendering
// Markdown for humans, pretty JSON for scripts; both go to stdout

mod markdown;

pub use markdown::{ledger_markdown, logs_markdown};

use anyhow::Result;
use serde::Serialize;

pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
