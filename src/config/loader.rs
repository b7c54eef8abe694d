//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::ReportConfig;
use super::secret::secret_string;
use crate::domain::errors::ReportError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "MARGIN_REPORT_";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into ReportConfig
/// 4. Applies environment variable overrides (MARGIN_REPORT_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns [`ReportError::Configuration`] if the file cannot be read,
/// a referenced variable is unset, parsing fails, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use margin_report::config::load_config;
///
/// let config = load_config("margin-report.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ReportConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ReportError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ReportError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    load_config_str(&contents)
}

/// Loads configuration from TOML text
///
/// Same pipeline as [`load_config`] minus the file read.
pub fn load_config_str(contents: &str) -> Result<ReportConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: ReportConfig = toml::from_str(&contents)
        .map_err(|e| ReportError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        ReportError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    tracing::debug!(
        base_url = %config.connect.base_url,
        product_id = %config.report.product_id,
        price_list_version = %config.report.price_list_version,
        "Configuration loaded"
    );

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched. All missing variables are reported
/// in one error.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| ReportError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    processed_line = processed_line.replace(&cap[0], &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ReportError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

fn env_override(key: &str) -> Option<String> {
    std::env::var(format!("{ENV_PREFIX}{key}")).ok()
}

/// Applies environment variable overrides using the MARGIN_REPORT_* prefix
///
/// Variables follow the pattern MARGIN_REPORT_<SECTION>_<KEY>, for example
/// MARGIN_REPORT_CONNECT_BASE_URL. Unparseable numeric or boolean values are
/// ignored and the file value kept.
fn apply_env_overrides(config: &mut ReportConfig) {
    if let Some(val) = env_override("APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Connect overrides
    if let Some(val) = env_override("CONNECT_BASE_URL") {
        config.connect.base_url = val;
    }
    if let Some(val) = env_override("CONNECT_API_KEY") {
        config.connect.api_key = Some(secret_string(val));
    }
    if let Some(timeout) = env_override("CONNECT_TIMEOUT_SECONDS").and_then(|v| v.parse().ok()) {
        config.connect.timeout_seconds = timeout;
    }
    if let Some(size) = env_override("CONNECT_PAGE_SIZE").and_then(|v| v.parse().ok()) {
        config.connect.page_size = size;
    }
    if let Some(verify) = env_override("CONNECT_TLS_VERIFY").and_then(|v| v.parse().ok()) {
        config.connect.tls_verify = verify;
    }

    // Report overrides
    if let Some(val) = env_override("REPORT_PRODUCT_ID") {
        config.report.product_id = val;
    }
    if let Some(val) = env_override("REPORT_PRICE_LIST_VERSION") {
        config.report.price_list_version = val;
    }
    if let Some(val) = env_override("REPORT_SKU_SUFFIX") {
        config.report.sku_suffix = val;
    }

    // Logging overrides
    if let Some(enabled) = env_override("LOGGING_LOCAL_ENABLED").and_then(|v| v.parse().ok()) {
        config.logging.local_enabled = enabled;
    }
    if let Some(val) = env_override("LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_skips_comments() {
        let input = "# key = \"${SURELY_UNSET_MARGIN_VAR}\"\nname = \"x\"\n";
        let output = substitute_env_vars(input).unwrap();
        assert!(output.contains("${SURELY_UNSET_MARGIN_VAR}"));
    }

    #[test]
    fn test_substitute_reports_all_missing() {
        let input = "a = \"${MISSING_MARGIN_ONE}\"\nb = \"${MISSING_MARGIN_TWO}\"\nc = \"${MISSING_MARGIN_ONE}\"\n";
        let err = substitute_env_vars(input).unwrap_err().to_string();
        assert!(err.contains("MISSING_MARGIN_ONE, MISSING_MARGIN_TWO"));
    }

    #[test]
    fn test_substitute_leaves_plain_text() {
        let input = "base_url = \"https://example.com\"";
        assert_eq!(
            substitute_env_vars(input).unwrap(),
            "base_url = \"https://example.com\"\n"
        );
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config("/definitely/not/here.toml").unwrap_err();
        assert!(err.to_string().contains("Configuration file not found"));
    }
}
