// zipaddr - Zip code to address lookup client
// Copyright (c) 2026 zipaddr Contributors
// Licensed under the MIT License

use std::process;
use zipaddr::cli::{report, Cli, DEFAULT_CONFIG_PATH};
use zipaddr::config::{load_config, load_config_or_default, ZipAddrConfig};
use zipaddr::logging::setup_logger;

use clap::Parser;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = match load_effective_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(report::EXIT_CONFIG);
        }
    };

    let log_level = cli
        .log_level
        .as_deref()
        .unwrap_or(&config.application.log_level);
    let guard = match setup_logger(&config.application.logger_name, log_level, &config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(report::EXIT_CONFIG);
        }
    };

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "zipaddr starting");

    let exit_code = match cli.lookup.execute(&config).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Lookup failed unexpectedly");
            eprintln!("Error: {e}");
            report::EXIT_FATAL
        }
    };

    // Flush file logs before exiting
    drop(guard);
    process::exit(exit_code);
}

/// Load configuration, then apply command-line overrides and re-validate
fn load_effective_config(cli: &Cli) -> anyhow::Result<ZipAddrConfig> {
    let mut config = match cli.config {
        Some(ref path) => load_config(path)?,
        None => load_config_or_default(DEFAULT_CONFIG_PATH)?,
    };

    cli.lookup.apply_overrides(&mut config);
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid command-line option: {e}"))?;

    Ok(config)
}
