//! Command-line argument definition.

use std::path::PathBuf;

use clap::Parser;

/// tds-history - browse the TDS Platform text-analysis history from the terminal
#[derive(Parser, Debug)]
#[command(name = "tds-history")]
#[command(version)]
#[command(about = "Browse the TDS Platform text-analysis interaction history", long_about = None)]
pub struct Args {
    /// Base URL of the analysis service (e.g. https://api.example.com)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Settings file to read instead of ~/.config/tds-history/settings.conf
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Fetch once and print the history as plain text instead of opening the TUI
    #[arg(short, long)]
    pub print: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// What: Flags parse into their fields with the documented defaults.
    ///
    /// Inputs:
    /// - A bare invocation and one with every flag
    ///
    /// Output:
    /// - Defaults for the bare call, provided values otherwise
    #[test]
    fn parses_flags_and_defaults() {
        let a = Args::try_parse_from(["tds-history"]).expect("bare invocation");
        assert!(a.base_url.is_none());
        assert!(!a.print);
        assert_eq!(a.log_level, "info");

        let a = Args::try_parse_from([
            "tds-history",
            "--base-url",
            "http://localhost:8000",
            "--config",
            "/tmp/s.conf",
            "-p",
            "-v",
            "--log-level",
            "warn",
        ])
        .expect("full invocation");
        assert_eq!(a.base_url.as_deref(), Some("http://localhost:8000"));
        assert_eq!(a.config, Some(PathBuf::from("/tmp/s.conf")));
        assert!(a.print);
        assert!(a.verbose);
        assert_eq!(a.log_level, "warn");
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Args::try_parse_from(["tds-history", "--dry-run"]).is_err());
    }
}
