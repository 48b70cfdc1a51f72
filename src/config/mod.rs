//! Configuration management for zipaddr.
//!
//! This module provides TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! Configuration files support:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `ZIPADDR_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level and logger name
//! - [`ApiConfig`] - Lookup service URL, timeouts and headers
//! - [`OutputConfig`] - Kana inclusion and JSON layout
//! - [`LoggingConfig`] - Local file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [api]
//! base_url = "https://api.zipcode-jp.example"
//! timeout_seconds = 30
//!
//! [api.headers]
//! X-Api-Key = "${ZIPADDR_API_KEY}"
//!
//! [output]
//! include_kana = true
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use zipaddr::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("zipaddr.toml")?;
//! println!("Lookup service: {}", config.api.base_url);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default};
pub use schema::{ApiConfig, ApplicationConfig, LoggingConfig, OutputConfig, ZipAddrConfig};
