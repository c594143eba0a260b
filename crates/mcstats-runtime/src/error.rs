use std::fmt;

/// Result type for mcstats-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Ledger database layer error
    Ledger(mcstats_ledger::Error),

    /// Server log layer error
    Logs(mcstats_logs::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),
}

impl Error {
    /// True when the error comes from an input path that does not exist.
    pub fn is_missing_input(&self) -> bool {
        matches!(
            self,
            Error::Ledger(mcstats_ledger::Error::MissingDatabase(_))
                | Error::Logs(mcstats_logs::Error::MissingPath(_))
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Ledger(err) => write!(f, "{}", err),
            Error::Logs(err) => write!(f, "{}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Ledger(err) => Some(err),
            Error::Logs(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Config(_) => None,
        }
    }
}

impl From<mcstats_ledger::Error> for Error {
    fn from(err: mcstats_ledger::Error) -> Self {
        Error::Ledger(err)
    }
}

impl From<mcstats_logs::Error> for Error {
    fn from(err: mcstats_logs::Error) -> Self {
        Error::Logs(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_inputs() {
        let ledger = Error::from(mcstats_ledger::Error::MissingDatabase(PathBuf::from("x")));
        let logs = Error::from(mcstats_logs::Error::MissingPath(PathBuf::from("y")));
        let config = Error::Config("bad".to_string());

        assert!(ledger.is_missing_input());
        assert!(logs.is_missing_input());
        assert!(!config.is_missing_input());
    }

    #[test]
    fn test_ledger_message_passes_through() {
        let err = Error::from(mcstats_ledger::Error::MissingDatabase(PathBuf::from(
            "ledger.sqlite",
        )));
        assert_eq!(err.to_string(), "Database not found: ledger.sqlite");
    }
}
