//! Configuration loading
//!
//! A configuration file goes through three stages before it is handed out:
//! `${VAR}` placeholders are expanded from the process environment, the TOML
//! is parsed into [`ZipAddrConfig`], and `ZIPADDR_<SECTION>_<KEY>` variables
//! are layered on top. The result is validated as a whole.

use super::schema::ZipAddrConfig;
use crate::domain::errors::ZipAddrError;
use crate::domain::result::Result;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Matches `${NAME}` where NAME is an upper-case environment variable name
const PLACEHOLDER_PATTERN: &str = r"\$\{([A-Z_][A-Z0-9_]*)\}";

/// Prefix shared by all override variables
const ENV_PREFIX: &str = "ZIPADDR";

/// Loads configuration from a TOML file
///
/// # Errors
///
/// Returns [`ZipAddrError::Configuration`] if the file is missing or
/// unreadable, a placeholder names an unset variable, the TOML is malformed,
/// an override variable holds an unparsable value, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use zipaddr::config::loader::load_config;
///
/// let config = load_config("zipaddr.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ZipAddrConfig> {
    let path = path.as_ref();

    let raw = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ZipAddrError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )),
        _ => ZipAddrError::Configuration(format!("Cannot read {}: {e}", path.display())),
    })?;

    let config = toml::from_str(&expand_placeholders(&raw)?)
        .map_err(|e| ZipAddrError::Configuration(format!("Failed to parse TOML: {e}")))?;

    finish(config)
}

/// Loads configuration if the file exists, otherwise starts from defaults
///
/// Environment overrides and validation apply in both cases. Use this for
/// the implicit default path; an explicitly requested file should go through
/// [`load_config`] so that a typo is reported.
///
/// # Errors
///
/// Returns an error if an existing file is invalid or validation fails
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<ZipAddrConfig> {
    let path = path.as_ref();
    if path.exists() {
        return load_config(path);
    }

    tracing::debug!(path = %path.display(), "No configuration file, using defaults");
    finish(ZipAddrConfig::default())
}

fn finish(mut config: ZipAddrConfig) -> Result<ZipAddrConfig> {
    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        ZipAddrError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Expand `${VAR}` placeholders outside of comment lines
///
/// Every unset variable is reported at once, in sorted order.
fn expand_placeholders(raw: &str) -> Result<String> {
    let pattern = Regex::new(PLACEHOLDER_PATTERN)
        .map_err(|e| ZipAddrError::Configuration(format!("Invalid placeholder pattern: {e}")))?;
    let mut unset = BTreeSet::new();

    let lines: Vec<Cow<'_, str>> = raw
        .lines()
        .map(|line| {
            if line.trim_start().starts_with('#') {
                return Cow::Borrowed(line);
            }
            pattern.replace_all(line, |caps: &Captures<'_>| {
                std::env::var(&caps[1]).unwrap_or_else(|_| {
                    unset.insert(caps[1].to_string());
                    caps[0].to_string()
                })
            })
        })
        .collect();

    if !unset.is_empty() {
        let names: Vec<String> = unset.into_iter().collect();
        return Err(ZipAddrError::Configuration(format!(
            "Missing required environment variables: {}",
            names.join(", ")
        )));
    }

    let mut expanded = lines.join("\n");
    expanded.push('\n');
    Ok(expanded)
}

/// Layer `ZIPADDR_<SECTION>_<KEY>` variables over the parsed file
///
/// # Errors
///
/// Returns an error if a numeric or boolean override cannot be parsed
fn apply_env_overrides(config: &mut ZipAddrConfig) -> Result<()> {
    let application = &mut config.application;
    override_with("APPLICATION_LOG_LEVEL", &mut application.log_level, text)?;
    override_with("APPLICATION_LOGGER_NAME", &mut application.logger_name, text)?;

    let api = &mut config.api;
    override_with("API_BASE_URL", &mut api.base_url, text)?;
    override_with("API_TIMEOUT_SECONDS", &mut api.timeout_seconds, seconds)?;
    override_with(
        "API_CONNECT_TIMEOUT_SECONDS",
        &mut api.connect_timeout_seconds,
        seconds,
    )?;

    let output = &mut config.output;
    override_with("OUTPUT_INCLUDE_KANA", &mut output.include_kana, flag)?;
    override_with("OUTPUT_PRETTY", &mut output.pretty, flag)?;

    let logging = &mut config.logging;
    override_with("LOGGING_LOCAL_ENABLED", &mut logging.local_enabled, flag)?;
    override_with("LOGGING_LOCAL_PATH", &mut logging.local_path, text)?;
    override_with("LOGGING_LOCAL_ROTATION", &mut logging.local_rotation, text)?;

    Ok(())
}

/// Replace `target` when `ZIPADDR_<key>` is set
fn override_with<T>(
    key: &str,
    target: &mut T,
    parse: fn(&str) -> std::result::Result<T, String>,
) -> Result<()> {
    let name = format!("{ENV_PREFIX}_{key}");
    let Ok(raw) = std::env::var(&name) else {
        return Ok(());
    };

    *target = parse(&raw).map_err(|e| ZipAddrError::Configuration(format!("{name}: {e}")))?;
    Ok(())
}

fn text(raw: &str) -> std::result::Result<String, String> {
    Ok(raw.to_string())
}

fn seconds(raw: &str) -> std::result::Result<u64, String> {
    raw.trim()
        .parse()
        .map_err(|_| format!("expected a whole number of seconds, got '{raw}'"))
}

fn flag(raw: &str) -> std::result::Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(format!("expected true/false, got '{raw}'")),
    }
}
