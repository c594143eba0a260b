use crate::presentation::{logs_markdown, to_json};
use crate::types::ReportFormat;
use anyhow::Result;
use mcstats_logs::ScanOptions;
use std::path::PathBuf;

pub fn handle(paths: &[PathBuf], limit: usize, format: ReportFormat) -> Result<()> {
    let stats = mcstats_logs::collect_stats(paths, ScanOptions::new(limit))?;

    let output = match format {
        ReportFormat::Json => to_json(&stats)?,
        ReportFormat::Markdown => logs_markdown(&stats),
    };
    println!("{}", output);

    Ok(())
}
