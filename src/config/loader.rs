// Waybill - Order Fulfillment Export and Delivery Engine
// Copyright (c) 2025 Waybill Contributors
// Licensed under the MIT License

//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::WaybillConfig;
use crate::domain::errors::WaybillError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into WaybillConfig
/// 4. Applies environment variable overrides (WAYBILL_* prefix)
/// 5. Validates the configuration
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use waybill::config::load_config;
///
/// let config = load_config("waybill.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<WaybillConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(WaybillError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        WaybillError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: WaybillConfig = toml::from_str(&contents)
        .map_err(|e| WaybillError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        WaybillError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched, so documented placeholders don't
/// require the variable to be set.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(WaybillError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the WAYBILL_* prefix
///
/// Environment variables follow the pattern: WAYBILL_<SECTION>_<KEY>
/// For example: WAYBILL_REFERENCE_BASE_URL, WAYBILL_DELIVERY_FTP_SEND_ENABLED
fn apply_env_overrides(config: &mut WaybillConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("WAYBILL_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Export overrides
    if let Ok(val) = std::env::var("WAYBILL_EXPORT_INCLUDE_ZERO_QUANTITY") {
        config.export.include_zero_quantity = val.parse().unwrap_or(true);
    }

    // Reference data service overrides
    if let Ok(val) = std::env::var("WAYBILL_REFERENCE_BASE_URL") {
        config.reference.base_url = val;
    }
    if let Ok(val) = std::env::var("WAYBILL_REFERENCE_USERNAME") {
        config.reference.username = Some(val);
    }
    if let Ok(val) = std::env::var("WAYBILL_REFERENCE_PASSWORD") {
        config.reference.password = Some(val);
    }
    if let Ok(val) = std::env::var("WAYBILL_REFERENCE_TIMEOUT_SECONDS") {
        if let Ok(timeout) = val.parse() {
            config.reference.timeout_seconds = timeout;
        }
    }

    // Delivery overrides
    if let Ok(val) = std::env::var("WAYBILL_DELIVERY_FTP_SEND_ENABLED") {
        config.delivery.ftp_send_enabled = val.parse().unwrap_or(true);
    }

    // Logging overrides
    if let Ok(val) = std::env::var("WAYBILL_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("WAYBILL_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_known_variable() {
        std::env::set_var("WAYBILL_TEST_SUBST_HOST", "reference.example.org");
        let input = "base_url = \"https://${WAYBILL_TEST_SUBST_HOST}\"";
        let output = substitute_env_vars(input).unwrap();
        assert!(output.contains("https://reference.example.org"));
        std::env::remove_var("WAYBILL_TEST_SUBST_HOST");
    }

    #[test]
    fn test_substitute_missing_variable_fails() {
        let input = "password = \"${WAYBILL_TEST_SUBST_MISSING}\"";
        let err = substitute_env_vars(input).unwrap_err();
        assert!(err.to_string().contains("WAYBILL_TEST_SUBST_MISSING"));
    }

    #[test]
    fn test_comment_lines_skipped() {
        let input = "# password = \"${WAYBILL_TEST_SUBST_COMMENTED}\"";
        let output = substitute_env_vars(input).unwrap();
        assert!(output.contains("${WAYBILL_TEST_SUBST_COMMENTED}"));
    }
}
