use crate::presentation::{ledger_markdown, to_json};
use crate::types::ReportFormat;
use anyhow::Result;
use std::path::Path;

pub fn handle(db_path: &Path, limit: usize, format: ReportFormat) -> Result<()> {
    let stats = mcstats_ledger::open_stats(db_path, limit)?;

    let output = match format {
        ReportFormat::Markdown => ledger_markdown(&stats),
        ReportFormat::Json => to_json(&stats)?,
    };
    println!("{}", output);

    Ok(())
}
