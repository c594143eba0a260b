use anyhow::Result;
use std::path::Path;

pub fn handle(src: &Path, dst: &Path) -> Result<()> {
    mcstats_ledger::snapshot(src, dst)?;
    println!("Snapshot complete: {} -> {}", src.display(), dst.display());
    Ok(())
}
