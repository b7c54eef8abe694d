//! Configuration schema types
//!
//! This module defines the configuration structure that maps to the TOML file.

use crate::config::SecretString;
use crate::domain::ids::{PriceListVersionId, ProductId};
use crate::render::RendererKind;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Main report configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Platform API connection
    pub connect: ConnectConfig,

    /// What the report extracts and prices
    #[serde(default)]
    pub report: ReportDefinition,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ReportConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.connect.validate()?;
        self.report.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Platform API connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectConfig {
    /// Base URL of the public API, e.g. `https://api.connect.cloudblue.com/public/v1`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Value sent verbatim in the `Authorization` header
    #[serde(default)]
    pub api_key: Option<SecretString>,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Records fetched per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// TLS certificate verification enabled
    #[serde(default = "default_true")]
    pub tls_verify: bool,
}

impl ConnectConfig {
    fn validate(&self) -> Result<(), String> {
        use secrecy::ExposeSecret;

        if self.base_url.is_empty() {
            return Err("connect.base_url cannot be empty".to_string());
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err("connect.base_url must start with http:// or https://".to_string());
        }

        if let Some(ref key) = self.api_key {
            if key.expose_secret().is_empty() {
                return Err("connect.api_key cannot be blank when set".to_string());
            }
        }

        if self.timeout_seconds == 0 {
            return Err("connect.timeout_seconds must be > 0".to_string());
        }

        if self.page_size == 0 || self.page_size > 1000 {
            return Err(format!(
                "connect.page_size must be between 1 and 1000, got {}",
                self.page_size
            ));
        }

        Ok(())
    }
}

impl Default for ConnectConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_seconds: default_timeout_seconds(),
            page_size: default_page_size(),
            tls_verify: true,
        }
    }
}

/// Report definition
///
/// Identifies the product whose purchases are reported and the price point
/// the margin is read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDefinition {
    /// Product whose approved purchases are reported
    #[serde(default = "default_product_id")]
    pub product_id: String,

    /// Price list version holding the product's price points
    #[serde(default = "default_price_list_version")]
    pub price_list_version: String,

    /// Suffix appended to the product id to form the priced item's global id
    #[serde(default = "default_sku_suffix")]
    pub sku_suffix: String,

    /// Price point attribute holding the price towards the distributor
    #[serde(default = "default_price_attribute")]
    pub price_attribute: String,

    /// Price point attribute holding the internal cost
    #[serde(default = "default_cost_attribute")]
    pub cost_attribute: String,

    /// Renderer types this report can be rendered with
    #[serde(default = "default_renderers")]
    pub renderers: Vec<String>,
}

impl ReportDefinition {
    fn validate(&self) -> Result<(), String> {
        ProductId::from_str(&self.product_id).map_err(|e| format!("report.product_id: {e}"))?;
        PriceListVersionId::from_str(&self.price_list_version)
            .map_err(|e| format!("report.price_list_version: {e}"))?;

        if self.sku_suffix.trim().is_empty() {
            return Err("report.sku_suffix cannot be empty".to_string());
        }

        if self.price_attribute.trim().is_empty() || self.cost_attribute.trim().is_empty() {
            return Err("report.price_attribute and report.cost_attribute cannot be empty".to_string());
        }

        if self.renderers.is_empty() {
            return Err("report.renderers must list at least one renderer".to_string());
        }

        for renderer in &self.renderers {
            RendererKind::from_str(renderer).map_err(|e| format!("report.renderers: {e}"))?;
        }

        Ok(())
    }

    /// The configured product as a typed id
    pub fn product(&self) -> Result<ProductId, String> {
        ProductId::from_str(&self.product_id)
    }

    /// The configured price list version as a typed id
    pub fn price_list(&self) -> Result<PriceListVersionId, String> {
        PriceListVersionId::from_str(&self.price_list_version)
    }

    /// Whether the definition lists a renderer kind
    pub fn supports(&self, kind: RendererKind) -> bool {
        self.renderers
            .iter()
            .filter_map(|r| RendererKind::from_str(r).ok())
            .any(|r| r == kind)
    }
}

impl Default for ReportDefinition {
    fn default() -> Self {
        Self {
            product_id: default_product_id(),
            price_list_version: default_price_list_version(),
            sku_suffix: default_sku_suffix(),
            price_attribute: default_price_attribute(),
            cost_attribute: default_cost_attribute(),
            renderers: default_renderers(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Log file directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when file logging is enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_base_url() -> String {
    "https://api.connect.cloudblue.com/public/v1".to_string()
}

fn default_true() -> bool {
    true
}

fn default_timeout_seconds() -> u64 {
    60
}

fn default_page_size() -> usize {
    100
}

fn default_product_id() -> String {
    "PRD-620-226-877".to_string()
}

fn default_price_list_version() -> String {
    "PLV-762-354-876-0001".to_string()
}

fn default_sku_suffix() -> String {
    "0001".to_string()
}

fn default_price_attribute() -> String {
    "price".to_string()
}

fn default_cost_attribute() -> String {
    "v.custom_1".to_string()
}

fn default_renderers() -> Vec<String> {
    vec!["xlsx".to_string()]
}

fn default_local_path() -> String {
    "/var/log/margin-report".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;

    #[test]
    fn test_application_config_validation() {
        let mut config = ApplicationConfig::default();
        assert!(config.validate().is_ok());

        config.log_level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_connect_config_validation() {
        let mut config = ConnectConfig::default();
        assert!(config.validate().is_ok());

        config.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());

        config.base_url = "https://api.example.com/public/v1".to_string();
        config.page_size = 0;
        assert!(config.validate().is_err());

        config.page_size = 1001;
        assert!(config.validate().is_err());

        config.page_size = 1000;
        config.timeout_seconds = 0;
        assert!(config.validate().is_err());

        config.timeout_seconds = 30;
        config.api_key = Some(secret_string(" ".to_string()));
        assert!(config.validate().is_err());

        config.api_key = Some(secret_string("ApiKey SU-1:abc".to_string()));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_report_definition_defaults() {
        let definition = ReportDefinition::default();
        assert!(definition.validate().is_ok());
        assert_eq!(definition.product().unwrap().as_str(), "PRD-620-226-877");
        assert_eq!(
            definition.price_list().unwrap().as_str(),
            "PLV-762-354-876-0001"
        );
        assert_eq!(definition.cost_attribute, "v.custom_1");
        assert!(definition.supports(RendererKind::Xlsx));
        assert!(!definition.supports(RendererKind::Json));
    }

    #[test]
    fn test_report_definition_validation() {
        let mut definition = ReportDefinition {
            product_id: "XYZ-1".to_string(),
            ..Default::default()
        };
        assert!(definition.validate().unwrap_err().contains("report.product_id"));

        definition.product_id = default_product_id();
        definition.price_list_version = "PRD-1".to_string();
        assert!(definition.validate().is_err());

        definition.price_list_version = default_price_list_version();
        definition.sku_suffix = "".to_string();
        assert!(definition.validate().is_err());

        definition.sku_suffix = default_sku_suffix();
        definition.renderers = vec![];
        assert!(definition.validate().is_err());

        definition.renderers = vec!["pdf".to_string()];
        assert!(definition.validate().is_err());

        definition.renderers = vec!["xlsx".to_string(), "csv".to_string()];
        assert!(definition.validate().is_ok());
    }

    #[test]
    fn test_logging_config_default() {
        let config = LoggingConfig::default();
        assert!(!config.local_enabled);
        assert_eq!(config.local_path, "/var/log/margin-report");
        assert_eq!(config.local_rotation, "daily");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_logging_rotation_validation() {
        let config = LoggingConfig {
            local_rotation: "weekly".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_values() {
        assert_eq!(default_log_level(), "info");
        assert_eq!(default_page_size(), 100);
        assert_eq!(default_timeout_seconds(), 60);
        assert_eq!(default_sku_suffix(), "0001");
        assert_eq!(default_renderers(), vec!["xlsx"]);
    }
}
