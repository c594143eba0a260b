use rusqlite::backup::Backup;
use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use std::time::Duration;

use crate::{Error, Result};

const PAGES_PER_STEP: std::ffi::c_int = 100;
const STEP_PAUSE: Duration = Duration::from_millis(10);

/// Copy a live Ledger database to `dst` with SQLite's online backup API.
///
/// The source is opened read-only and copied in small steps so the server
/// can keep writing. An existing `dst` is overwritten; its parent directory
/// is created when missing.
pub fn snapshot(src: &Path, dst: &Path) -> Result<()> {
    if !src.exists() {
        return Err(Error::MissingDatabase(src.to_path_buf()));
    }
    if let Some(parent) = dst.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let source = Connection::open_with_flags(src, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
    let mut target = Connection::open(dst)?;

    tracing::debug!(src = %src.display(), dst = %dst.display(), "starting ledger backup");
    {
        let backup = Backup::new(&source, &mut target)?;
        backup.run_to_completion(PAGES_PER_STEP, STEP_PAUSE, None)?;
    }
    tracing::info!(src = %src.display(), dst = %dst.display(), "ledger snapshot written");

    Ok(())
}
