//! Integration tests for logging functionality
//!
//! A global subscriber can only be installed once per process, so the
//! installing path is covered by a single test.

use tempfile::TempDir;
use zipaddr::config::LoggingConfig;
use zipaddr::domain::ZipAddrError;
use zipaddr::logging::setup_logger;

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert!(!config.local_enabled);
    assert_eq!(config.local_path, "logs");
    assert_eq!(config.local_rotation, "daily");
}

#[test]
fn test_invalid_arguments_are_rejected() {
    let config = LoggingConfig::default();

    let result = setup_logger("", "info", &config);
    assert!(matches!(result, Err(ZipAddrError::Validation(_))));

    let result = setup_logger("zipaddr", "verbose", &config);
    assert!(matches!(result, Err(ZipAddrError::Validation(_))));
}

#[test]
fn test_file_logging_creates_directory() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("logs");

    let config = LoggingConfig {
        local_enabled: true,
        local_path: log_path.to_string_lossy().to_string(),
        local_rotation: "never".to_string(),
    };

    let guard = setup_logger("zipaddr-test", "debug", &config).unwrap();
    assert!(guard.has_file_output());
    assert!(log_path.is_dir());

    tracing::info!(zipcode = "1000001", "lookup started");

    // Second installation in the same process fails
    let second = setup_logger("zipaddr-test", "debug", &LoggingConfig::default());
    assert!(matches!(second, Err(ZipAddrError::Configuration(_))));

    drop(guard);
    assert!(log_path.join("zipaddr-test.log").exists());
}
