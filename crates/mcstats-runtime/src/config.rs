use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Runtime settings shared by every subcommand.
///
/// Values come from an optional TOML file and are then overridden by
/// environment variables (`LEDGER_DB`, `STATS_LIMIT`, `LOGS_DIR`,
/// `LOG_STATS_LIMIT`, `LEDGER_CACHE_TTL`, `LOG_CACHE_TTL`, `PUBLIC_DIR`,
/// `HOST`, `PORT`). Command-line flags take precedence over both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ledger_db: PathBuf,
    pub stats_limit: usize,
    pub logs_dir: PathBuf,
    pub log_stats_limit: usize,
    /// Seconds; 0 disables caching.
    pub ledger_cache_ttl: u64,
    /// Seconds; 0 disables caching.
    pub log_cache_ttl: u64,
    pub public_dir: PathBuf,
    pub host: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ledger_db: PathBuf::from("ledger.sqlite"),
            stats_limit: mcstats_ledger::DEFAULT_LIMIT,
            logs_dir: PathBuf::from("logs"),
            log_stats_limit: mcstats_logs::DEFAULT_LIMIT,
            ledger_cache_ttl: 1800,
            log_cache_ttl: 600,
            public_dir: PathBuf::from("public"),
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl Config {
    /// Load from `explicit` (must exist) or the default location (optional),
    /// then apply environment overrides.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) if !path.exists() => {
                return Err(Error::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            Some(path) => Self::load_from(path)?,
            None => match Self::default_path() {
                Some(path) => Self::load_from(&path)?,
                None => Self::default(),
            },
        };
        config.apply_env();
        Ok(config)
    }

    /// Read a TOML file; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// `MCSTATS_CONFIG`, else `<config dir>/mcstats/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("MCSTATS_CONFIG") {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("mcstats").join("config.toml"))
    }

    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from `lookup`. Numeric values that fail to parse keep
    /// the current setting.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("LEDGER_DB") {
            self.ledger_db = PathBuf::from(v);
        }
        if let Some(v) = lookup("LOGS_DIR") {
            self.logs_dir = PathBuf::from(v);
        }
        if let Some(v) = lookup("PUBLIC_DIR") {
            self.public_dir = PathBuf::from(v);
        }
        if let Some(v) = lookup("HOST") {
            self.host = v;
        }
        parse_into(&lookup, "STATS_LIMIT", &mut self.stats_limit);
        parse_into(&lookup, "LOG_STATS_LIMIT", &mut self.log_stats_limit);
        parse_into(&lookup, "LEDGER_CACHE_TTL", &mut self.ledger_cache_ttl);
        parse_into(&lookup, "LOG_CACHE_TTL", &mut self.log_cache_ttl);
        parse_into(&lookup, "PORT", &mut self.port);
    }

    pub fn ledger_ttl(&self) -> Duration {
        Duration::from_secs(self.ledger_cache_ttl)
    }

    pub fn log_ttl(&self) -> Duration {
        Duration::from_secs(self.log_cache_ttl)
    }
}

fn parse_into<F, T>(lookup: &F, key: &str, slot: &mut T)
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let Some(raw) = lookup(key) else {
        return;
    };
    match raw.trim().parse() {
        Ok(value) => *slot = value,
        Err(_) => tracing::warn!(key, value = %raw, "ignoring unparseable setting"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.ledger_db, PathBuf::from("ledger.sqlite"));
        assert_eq!(config.stats_limit, 10);
        assert_eq!(config.log_stats_limit, 5);
        assert_eq!(config.ledger_ttl(), Duration::from_secs(1800));
        assert_eq!(config.log_ttl(), Duration::from_secs(600));
        assert_eq!(config.port, 5000);
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("nonexistent.toml"))?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_load_partial_file_keeps_other_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "ledger_db = \"/srv/world/ledger.sqlite\"\nport = 8080\n")?;

        let config = Config::load_from(&path)?;
        assert_eq!(config.ledger_db, PathBuf::from("/srv/world/ledger.sqlite"));
        assert_eq!(config.port, 8080);
        assert_eq!(config.stats_limit, 10);
        Ok(())
    }

    #[test]
    fn test_load_invalid_toml() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "port = \"not a number\"")?;

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        Ok(())
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let err = Config::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn test_env_overrides() {
        let vars = env(&[
            ("LEDGER_DB", "/data/ledger.sqlite"),
            ("LOGS_DIR", "/data/logs"),
            ("STATS_LIMIT", "25"),
            ("LOG_STATS_LIMIT", "3"),
            ("LEDGER_CACHE_TTL", "0"),
            ("PORT", "9000"),
        ]);
        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).cloned());

        assert_eq!(config.ledger_db, PathBuf::from("/data/ledger.sqlite"));
        assert_eq!(config.logs_dir, PathBuf::from("/data/logs"));
        assert_eq!(config.stats_limit, 25);
        assert_eq!(config.log_stats_limit, 3);
        assert_eq!(config.ledger_cache_ttl, 0);
        assert_eq!(config.log_cache_ttl, 600);
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn test_unparseable_env_keeps_value() {
        let vars = env(&[("STATS_LIMIT", "lots"), ("PORT", "-1")]);
        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).cloned());

        assert_eq!(config.stats_limit, 10);
        assert_eq!(config.port, 5000);
    }
}
