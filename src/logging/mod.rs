//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Human readable console output on stderr
//! - Configurable log levels, overridable with `RUST_LOG`
//! - Local JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use zipaddr::logging::setup_logger;
//! use zipaddr::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = setup_logger("zipaddr", "info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!(zipcode = "1000001", "Looking up address");
//! ```

pub mod structured;
pub mod validation;

// Re-export commonly used items
pub use structured::{init_logging, setup_logger, LoggingGuard};
pub use validation::{LogLevel, LoggerName};

/// Log a failed lookup with its kind
///
/// # Example
///
/// ```no_run
/// use zipaddr::log_lookup_failure;
/// use zipaddr::domain::{FetchError, ZipCode};
///
/// let zipcode = ZipCode::new("0000000");
/// let error = FetchError::network("connection refused");
/// log_lookup_failure!(&zipcode, &error);
/// ```
#[macro_export]
macro_rules! log_lookup_failure {
    ($zipcode:expr, $error:expr) => {
        tracing::warn!(
            zipcode = %$zipcode,
            kind = %$error.kind,
            message = %$error.message,
            "Address lookup failed"
        );
    };
}
