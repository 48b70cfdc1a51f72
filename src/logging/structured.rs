//! Structured logging setup using tracing
//!
//! Console output goes to stderr so that stdout carries only the lookup
//! result. An optional JSON file layer writes through a rolling appender.

use super::validation::{LogLevel, LoggerName};
use crate::config::LoggingConfig;
use crate::domain::{Result, ZipAddrError};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Guard that must be kept alive for the duration of the program
/// to ensure logs are flushed properly
pub struct LoggingGuard {
    file_guard: Option<WorkerGuard>,
}

impl LoggingGuard {
    fn new(file_guard: Option<WorkerGuard>) -> Self {
        Self { file_guard }
    }

    /// Returns true if a file layer is being flushed by this guard
    pub fn has_file_output(&self) -> bool {
        self.file_guard.is_some()
    }
}

/// Validate logger arguments and initialize logging
///
/// Arguments are checked before anything is installed, so a bad name or
/// level leaves the global subscriber untouched.
///
/// # Errors
///
/// Returns [`ZipAddrError::Validation`] for an invalid name or level, or a
/// configuration error if the subscriber cannot be installed.
///
/// # Example
///
/// ```no_run
/// use zipaddr::config::LoggingConfig;
/// use zipaddr::logging::setup_logger;
///
/// let _guard = setup_logger("zipaddr", "info", &LoggingConfig::default())
///     .expect("Failed to initialize logging");
/// tracing::info!("Application started");
/// ```
pub fn setup_logger(name: &str, level: &str, config: &LoggingConfig) -> Result<LoggingGuard> {
    let name = LoggerName::new(name)?;
    let level: LogLevel = level.parse()?;
    init_logging(&name, level, config)
}

/// Initialize the logging system
///
/// `RUST_LOG` takes precedence over `level` when set.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created or a global
/// subscriber is already installed.
pub fn init_logging(
    name: &LoggerName,
    level: LogLevel,
    config: &LoggingConfig,
) -> Result<LoggingGuard> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(level)));

    let mut layers = Vec::new();

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(env_filter.clone());
    layers.push(console_layer.boxed());

    let file_guard = if config.local_enabled {
        std::fs::create_dir_all(&config.local_path).map_err(|e| {
            ZipAddrError::Configuration(format!(
                "Failed to create log directory {}: {}",
                config.local_path, e
            ))
        })?;

        let file_appender = RollingFileAppender::new(
            rotation(&config.local_rotation),
            &config.local_path,
            format!("{name}.log"),
        );
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let file_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true)
            .with_writer(non_blocking)
            .with_filter(env_filter);
        layers.push(file_layer.boxed());
        Some(guard)
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .map_err(|e| ZipAddrError::Configuration(format!("Failed to initialize logging: {e}")))?;

    tracing::debug!(
        logger = %name,
        level = %level,
        local_enabled = config.local_enabled,
        local_path = %config.local_path,
        "Logging initialized"
    );

    Ok(LoggingGuard::new(file_guard))
}

fn default_directive(level: LogLevel) -> String {
    format!("{}={}", env!("CARGO_CRATE_NAME"), level)
}

fn rotation(name: &str) -> Rotation {
    match name {
        "hourly" => Rotation::HOURLY,
        "never" => Rotation::NEVER,
        _ => Rotation::DAILY,
    }
}
