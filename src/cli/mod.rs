//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for zipaddr using clap.

pub mod lookup;
pub mod report;

use clap::Parser;

/// Configuration file read when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "zipaddr.toml";

/// zipaddr - look up a Japanese address by zip code
#[derive(Parser, Debug)]
#[command(name = "zipaddr")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, env = "ZIPADDR_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "ZIPADDR_LOG_LEVEL")]
    pub log_level: Option<String>,

    #[command(flatten)]
    pub lookup: lookup::LookupArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_zipcode() {
        let cli = Cli::parse_from(["zipaddr", "1000001"]);
        assert_eq!(cli.lookup.zipcode, "1000001");
        assert!(cli.config.is_none());
        assert!(cli.lookup.include_kana(true));
        assert!(!cli.lookup.include_kana(false));
    }

    #[test]
    fn test_cli_parse_no_include_kana() {
        let cli = Cli::parse_from(["zipaddr", "--no-include-kana", "1000001"]);
        assert!(!cli.lookup.include_kana(true));
    }

    #[test]
    fn test_cli_kana_flags_last_one_wins() {
        let cli = Cli::parse_from(["zipaddr", "--no-include-kana", "--include-kana", "1000001"]);
        assert!(cli.lookup.include_kana(false));

        let cli = Cli::parse_from(["zipaddr", "--include-kana", "--no-include-kana", "1000001"]);
        assert!(!cli.lookup.include_kana(true));
    }

    #[test]
    fn test_cli_parse_with_config_and_log_level() {
        let cli = Cli::parse_from([
            "zipaddr",
            "--config",
            "custom.toml",
            "--log-level",
            "debug",
            "1000001",
        ]);
        assert_eq!(cli.config.as_deref(), Some("custom.toml"));
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_headers() {
        let cli = Cli::parse_from([
            "zipaddr",
            "-H",
            "X-Api-Key=abc",
            "--header",
            "X-Trace=1",
            "1000001",
        ]);
        let headers = cli.lookup.request_headers().unwrap();
        assert_eq!(headers.len(), 2);
        assert_eq!(headers["X-Api-Key"], "abc");
    }

    #[test]
    fn test_cli_rejects_malformed_header() {
        let err = Cli::try_parse_from(["zipaddr", "-H", "X Bad=1", "1000001"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_cli_requires_zipcode() {
        assert!(Cli::try_parse_from(["zipaddr"]).is_err());
    }

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::parse_from([
            "zipaddr",
            "--base-url",
            "http://localhost:3000",
            "--timeout",
            "3",
            "--compact",
            "1000001",
        ]);
        let mut config = crate::config::ZipAddrConfig::default();
        cli.lookup.apply_overrides(&mut config);

        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.api.timeout_seconds, 3);
        assert!(!config.output.pretty);
        assert!(cli.lookup.request_headers().is_none());
    }
}
