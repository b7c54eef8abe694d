//! Integration tests for logging functionality
//!
//! A global subscriber can only be installed once per process, so
//! everything that calls `init_logging` lives in a single test.

use margin_report::config::LoggingConfig;
use margin_report::logging::{init_logging, parse_log_level};
use tempfile::TempDir;
use tracing::Level;

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert!(!config.local_enabled);
    assert_eq!(config.local_path, "/var/log/margin-report");
    assert_eq!(config.local_rotation, "daily");
}

#[test]
fn test_parse_log_level_from_config_value() {
    assert_eq!(parse_log_level("info").unwrap(), Level::INFO);
    assert!(parse_log_level("verbose").is_err());
}

#[test]
fn test_init_logging_installs_once() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("logs");

    let config = LoggingConfig {
        local_enabled: true,
        local_path: log_path.to_string_lossy().to_string(),
        local_rotation: "never".to_string(),
    };

    assert!(!log_path.exists());

    // An unknown level fails before anything is installed or created
    assert!(init_logging("loud", &config).is_err());
    assert!(!log_path.exists());

    let guard = init_logging("debug", &config).expect("first install should succeed");
    assert!(guard.has_file_output());
    assert!(log_path.is_dir());

    tracing::info!(product_id = "PRD-620-226-877", "written to file");

    let second = init_logging("info", &LoggingConfig::default());
    assert!(second.is_err());

    drop(guard);
}
