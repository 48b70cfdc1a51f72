//! Validated logger arguments
//!
//! Smart constructors for the arguments of [`setup_logger`](super::setup_logger).
//! Each one rejects bad input with a [`ValidationError`] naming the argument.

use crate::domain::ValidationError;
use std::fmt;
use std::str::FromStr;

/// Log verbosity
///
/// Parsing is case-insensitive and accepts the aliases `warning` and
/// `critical` in addition to the tracing level names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Lowercase name, as used in filter directives
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" | "critical" => Ok(LogLevel::Error),
            _ => Err(ValidationError::new(
                "level",
                format!("'{s}' is not one of: trace, debug, info, warn, error"),
            )),
        }
    }
}

/// Non-blank logger name
///
/// Used as the log file stem, so surrounding whitespace is trimmed and path
/// separators are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LoggerName(String);

impl LoggerName {
    /// Validate and wrap a logger name
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for an empty or whitespace-only name, or
    /// one containing a path separator
    pub fn new(name: impl AsRef<str>) -> Result<Self, ValidationError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(ValidationError::new("name", "empty strings are not allowed"));
        }
        if name.contains(['/', '\\']) {
            return Err(ValidationError::new(
                "name",
                format!("'{name}' must not contain path separators"),
            ));
        }
        Ok(Self(name.to_string()))
    }

    /// Returns the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LoggerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("trace" => LogLevel::Trace)]
    #[test_case("DEBUG" => LogLevel::Debug)]
    #[test_case(" Info " => LogLevel::Info)]
    #[test_case("WARNING" => LogLevel::Warn)]
    #[test_case("warn" => LogLevel::Warn)]
    #[test_case("CRITICAL" => LogLevel::Error)]
    fn test_log_level_parse(input: &str) -> LogLevel {
        input.parse().unwrap()
    }

    #[test]
    fn test_log_level_parse_invalid() {
        let err = "verbose".parse::<LogLevel>().unwrap_err();
        assert_eq!(err.field, "level");
        assert!(err.message.contains("verbose"));
        assert!("".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_log_level_default_and_display() {
        assert_eq!(LogLevel::default(), LogLevel::Info);
        assert_eq!(LogLevel::Warn.to_string(), "warn");
    }

    #[test]
    fn test_logger_name_trims() {
        let name = LoggerName::new("  zipaddr ").unwrap();
        assert_eq!(name.as_str(), "zipaddr");
    }

    #[test_case("" ; "empty")]
    #[test_case("   " ; "whitespace")]
    #[test_case("\t\n" ; "control whitespace")]
    fn test_logger_name_rejects_blank(input: &str) {
        let err = LoggerName::new(input).unwrap_err();
        assert_eq!(err, ValidationError::new("name", "empty strings are not allowed"));
    }

    #[test]
    fn test_logger_name_rejects_path() {
        assert!(LoggerName::new("../zipaddr").is_err());
        assert!(LoggerName::new("logs\\zipaddr").is_err());
    }
}
