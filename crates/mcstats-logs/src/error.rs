use std::fmt;
use std::path::PathBuf;

/// Result type for mcstats-logs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while scanning server logs
#[derive(Debug)]
pub enum Error {
    /// A log file or directory passed by the caller does not exist
    MissingPath(PathBuf),

    /// Reading a log source failed after it was discovered
    Io { path: PathBuf, source: std::io::Error },

    /// Directory listing failed
    WalkDir(walkdir::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingPath(path) => write!(f, "Log path not found: {}", path.display()),
            Error::Io { path, source } => {
                write!(f, "IO error reading {}: {}", path.display(), source)
            }
            Error::WalkDir(err) => write!(f, "Directory traversal error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            Error::WalkDir(err) => Some(err),
            Error::MissingPath(_) => None,
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::WalkDir(err)
    }
}
