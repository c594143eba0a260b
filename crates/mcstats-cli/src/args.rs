use crate::types::{LogLevel, ReportFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mcstats")]
#[command(about = "Leaderboards and activity stats for a Minecraft server", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: $MCSTATS_CONFIG or <config dir>/mcstats/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "info", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Report aggregates from a Ledger SQLite database")]
    Ledger {
        #[arg(long, help = "Path to the Ledger SQLite file")]
        db: Option<PathBuf>,

        #[arg(long, help = "Row limit for leaderboards")]
        limit: Option<usize>,

        #[arg(long, default_value = "markdown")]
        format: ReportFormat,
    },

    #[command(about = "Report player stats from server log files")]
    Logs {
        #[arg(help = "Log files or directories containing .log / .log.gz files")]
        paths: Vec<PathBuf>,

        #[arg(long, help = "Row limit for each leaderboard")]
        limit: Option<usize>,

        #[arg(long, default_value = "json")]
        format: ReportFormat,
    },

    #[command(about = "Copy a live Ledger database using SQLite's backup API")]
    Snapshot {
        #[arg(long, help = "Path to the live ledger.sqlite in the world directory")]
        src: PathBuf,

        #[arg(long, default_value = "ledger.sqlite", help = "Path to write the snapshot")]
        dst: PathBuf,
    },

    #[command(about = "Serve the stats JSON API and the static dashboard")]
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(long)]
        port: Option<u16>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_ledger_defaults_to_markdown() {
        let cli = Cli::parse_from(["mcstats", "ledger"]);
        match cli.command {
            Commands::Ledger { db, limit, format } => {
                assert!(db.is_none());
                assert!(limit.is_none());
                assert_eq!(format, ReportFormat::Markdown);
            }
            _ => panic!("expected ledger command"),
        }
    }

    #[test]
    fn test_logs_accepts_many_paths() {
        let cli = Cli::parse_from(["mcstats", "logs", "a.log", "logs/", "--limit", "3"]);
        match cli.command {
            Commands::Logs {
                paths,
                limit,
                format,
            } => {
                assert_eq!(paths, vec![PathBuf::from("a.log"), PathBuf::from("logs/")]);
                assert_eq!(limit, Some(3));
                assert_eq!(format, ReportFormat::Json);
            }
            _ => panic!("expected logs command"),
        }
    }

    #[test]
    fn test_snapshot_requires_src() {
        assert!(Cli::try_parse_from(["mcstats", "snapshot"]).is_err());
    }
}
