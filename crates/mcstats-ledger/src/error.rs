use std::fmt;
use std::path::PathBuf;

/// Result type for mcstats-ledger operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the ledger layer
#[derive(Debug)]
pub enum Error {
    /// The ledger file does not exist
    MissingDatabase(PathBuf),

    /// Database operation failed
    Database(rusqlite::Error),

    /// IO operation failed
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingDatabase(path) => {
                write!(f, "Database not found: {}", path.display())
            }
            Error::Database(err) => {
                let msg = err.to_string();
                // A ledger from a different mod version usually shows up this way
                if msg.contains("no such column") || msg.contains("no such table") {
                    write!(
                        f,
                        "Ledger schema mismatch: {}. Is this a Ledger database?",
                        msg
                    )
                } else {
                    write!(f, "Database error: {}", err)
                }
            }
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Database(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::MissingDatabase(_) => None,
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::Database(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
