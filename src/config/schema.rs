// Waybill - Order Fulfillment Export and Delivery Engine
// Copyright (c) 2025 Waybill Contributors
// Licensed under the MIT License

//! Configuration schema types
//!
//! This module defines the configuration structure for Waybill. The root
//! [`WaybillConfig`] maps one-to-one onto the TOML file; each section owns
//! its own validation.

use serde::{Deserialize, Serialize};

/// Main Waybill configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaybillConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Export engine settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Reference data service connection
    pub reference: ReferenceConfig,

    /// Delivery coordinator settings
    #[serde(default)]
    pub delivery: DeliveryConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl WaybillConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.reference.validate()?;
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

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
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

/// Export engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Whether line items with an ordered quantity of zero are written
    #[serde(default = "default_include_zero_quantity")]
    pub include_zero_quantity: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            include_zero_quantity: default_include_zero_quantity(),
        }
    }
}

/// Reference data service connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceConfig {
    /// Base URL of the reference data service, e.g.
    /// `https://reference.example.org`
    pub base_url: String,

    /// Basic auth username, when the service requires authentication
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Basic auth password
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl ReferenceConfig {
    fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("reference.base_url must not be empty".to_string());
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(format!(
                "reference.base_url must start with http:// or https://, got '{}'",
                self.base_url
            ));
        }
        if self.timeout_seconds == 0 {
            return Err("reference.timeout_seconds must be greater than zero".to_string());
        }
        if self.username.is_some() != self.password.is_some() {
            return Err(
                "reference.username and reference.password must be set together".to_string(),
            );
        }
        Ok(())
    }
}

/// Delivery coordinator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryConfig {
    /// Whether FTP-family sends are attempted at all. When disabled, an
    /// order routed to an FTP destination is stored locally and marked
    /// ready to pack instead of being sent.
    #[serde(default = "default_ftp_send_enabled")]
    pub ftp_send_enabled: bool,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            ftp_send_enabled: default_ftp_send_enabled(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Whether to write log files in addition to console output
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Rotation policy: "daily" or "hourly"
    #[serde(default = "default_log_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_log_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path must be set when local_enabled = true".to_string());
        }
        Ok(())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_include_zero_quantity() -> bool {
    true
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_ftp_send_enabled() -> bool {
    true
}

fn default_log_path() -> String {
    "logs".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> ReferenceConfig {
        ReferenceConfig {
            base_url: "https://reference.example.org".to_string(),
            username: None,
            password: None,
            timeout_seconds: 30,
        }
    }

    #[test]
    fn test_defaults() {
        let config = WaybillConfig {
            application: ApplicationConfig::default(),
            export: ExportConfig::default(),
            reference: reference(),
            delivery: DeliveryConfig::default(),
            logging: LoggingConfig::default(),
        };

        assert_eq!(config.application.log_level, "info");
        assert!(config.export.include_zero_quantity);
        assert!(config.delivery.ftp_send_enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let mut config = ApplicationConfig::default();
        config.log_level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_base_url_scheme_required() {
        let mut config = reference();
        config.base_url = "reference.example.org".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_credentials_must_be_paired() {
        let mut config = reference();
        config.username = Some("svc-waybill".to_string());
        assert!(config.validate().is_err());

        config.password = Some("secret".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rotation_validated() {
        let mut config = LoggingConfig::default();
        config.local_rotation = "weekly".to_string();
        assert!(config.validate().is_err());
    }
}
