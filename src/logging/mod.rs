//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - JSON-formatted file logs
//! - Configurable log levels
//! - Local file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use margin_report::logging::init_logging;
//! use margin_report::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Report host started");
//! ```

pub mod structured;

pub use structured::{init_logging, parse_log_level, LoggingGuard};

/// Log the start of a report run, once the total is known
///
/// # Example
///
/// ```no_run
/// use margin_report::log_report_start;
///
/// log_report_start!("PRD-620-226-877", 42u64);
/// ```
#[macro_export]
macro_rules! log_report_start {
    ($product_id:expr, $total:expr) => {
        tracing::info!(
            product_id = %$product_id,
            total = $total,
            "Starting margin report"
        );
    };
}

/// Log per-row progress
///
/// # Example
///
/// ```no_run
/// use margin_report::log_report_progress;
///
/// log_report_progress!(10u64, 100u64);
/// ```
#[macro_export]
macro_rules! log_report_progress {
    ($current:expr, $total:expr) => {
        tracing::debug!(
            current = $current,
            total = $total,
            progress_pct = if $total == 0 {
                100.0
            } else {
                $current as f64 / $total as f64 * 100.0
            },
            "Processing request"
        );
    };
}
