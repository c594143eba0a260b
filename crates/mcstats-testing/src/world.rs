//! Isolated on-disk environment for integration tests.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::ledger::LedgerFixture;
use crate::logs::write_log;

/// Temp directory holding a `logs/` folder, a `public/` folder and a
/// `ledger.sqlite` path. Everything is removed when the world is dropped.
pub struct TestWorld {
    temp_dir: TempDir,
    logs_dir: PathBuf,
    public_dir: PathBuf,
    ledger_path: PathBuf,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base = temp_dir.path().to_path_buf();
        let logs_dir = base.join("logs");
        let public_dir = base.join("public");

        std::fs::create_dir_all(&logs_dir).expect("Failed to create logs dir");
        std::fs::create_dir_all(&public_dir).expect("Failed to create public dir");

        Self {
            temp_dir,
            logs_dir,
            public_dir,
            ledger_path: base.join("ledger.sqlite"),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn logs_dir(&self) -> &Path {
        &self.logs_dir
    }

    pub fn public_dir(&self) -> &Path {
        &self.public_dir
    }

    pub fn ledger_path(&self) -> &Path {
        &self.ledger_path
    }

    /// Write a file into `logs/`; `.gz` names are compressed.
    pub fn with_log(self, name: &str, content: &str) -> Self {
        write_log(&self.logs_dir.join(name), content).expect("Failed to write log");
        self
    }

    /// Create `ledger.sqlite` populated with the four-action sample.
    pub fn with_sample_ledger(self) -> Self {
        LedgerFixture::with_sample_actions(&self.ledger_path).expect("Failed to build ledger");
        self
    }

    pub fn with_public_file(self, name: &str, content: &str) -> Self {
        std::fs::write(self.public_dir.join(name), content).expect("Failed to write public file");
        self
    }

    /// Open (or create) the ledger for further inserts.
    pub fn ledger(&self) -> Result<LedgerFixture> {
        if self.ledger_path.exists() {
            LedgerFixture::open(&self.ledger_path)
        } else {
            LedgerFixture::create(&self.ledger_path)
        }
    }
}
