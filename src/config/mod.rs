//! Configuration management for margin reports.
//!
//! TOML configuration files with:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `MARGIN_REPORT_<SECTION>_<KEY>` environment overrides
//! - Default values matching the stock report definition
//! - Validation on load
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level
//! - [`ConnectConfig`] - Platform API URL, key, timeout and page size
//! - [`ReportDefinition`] - Product, price list, SKU and pricing attributes
//! - [`LoggingConfig`] - File logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [connect]
//! base_url = "https://api.connect.cloudblue.com/public/v1"
//! api_key = "${MARGIN_REPORT_API_KEY}"
//! page_size = 100
//!
//! [report]
//! product_id = "PRD-620-226-877"
//! price_list_version = "PLV-762-354-876-0001"
//! sku_suffix = "0001"
//! cost_attribute = "v.custom_1"
//! renderers = ["xlsx"]
//! ```
//!
//! ```rust,no_run
//! use margin_report::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("margin-report.toml")?;
//! println!("Reporting on {}", config.report.product_id);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::{load_config, load_config_str};
pub use schema::{ApplicationConfig, ConnectConfig, LoggingConfig, ReportConfig, ReportDefinition};
pub use secret::{secret_string, SecretString, SecretValue};
