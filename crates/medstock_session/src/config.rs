//! Medstock configuration management.
//!
//! Handles loading of the dashboard configuration from TOML files with
//! environment variable override support.

use medstock_core::types::Scenario;
use medstock_models::alerts::AlertThresholds;
use medstock_models::forecast::ForecastConfig;
use medstock_models::timeline::{DEFAULT_TIMELINE_MONTHS, TIMELINE_MONTH_OPTIONS};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Default configuration file name, resolved against the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "medstock.toml";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("IO error: {0}")]
    Io(String),

    /// The file is not valid TOML for this schema
    #[error("Parse error: {0}")]
    Parse(String),

    /// One or more values failed validation
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Dashboard configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MedstockConfig {
    /// Base URL of the medication chart API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Chart owner whose records are requested
    #[serde(default = "default_user_id")]
    pub user_id: u64,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Server forecast scenario
    #[serde(default)]
    pub scenario: Scenario,

    /// Timeline horizon in months
    #[serde(default = "default_timeline_months")]
    pub timeline_months: u32,

    /// Pay-period forecast settings
    #[serde(default)]
    pub forecast: ForecastConfig,

    /// Stock alert thresholds
    #[serde(default)]
    pub alerts: AlertThresholds,
}

fn default_api_url() -> String {
    "https://darthyoda.pythonanywhere.com".to_string()
}

fn default_user_id() -> u64 {
    1
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_timeline_months() -> u32 {
    DEFAULT_TIMELINE_MONTHS
}

impl Default for MedstockConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            user_id: default_user_id(),
            log_level: default_log_level(),
            scenario: Scenario::default(),
            timeline_months: default_timeline_months(),
            forecast: ForecastConfig::default(),
            alerts: AlertThresholds::default(),
        }
    }
}

impl MedstockConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply `MEDSTOCK_*` environment variable overrides
    pub fn with_env_override(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    ///
    /// Values that fail to parse leave the current setting untouched.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_url) = lookup("MEDSTOCK_API_URL") {
            self.api_url = api_url;
        }

        if let Some(user_id) = lookup("MEDSTOCK_USER_ID") {
            self.user_id = user_id.trim().parse().unwrap_or(self.user_id);
        }

        if let Some(log_level) = lookup("MEDSTOCK_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Some(scenario) = lookup("MEDSTOCK_SCENARIO") {
            self.scenario = scenario.parse().unwrap_or(self.scenario);
        }

        if let Some(months) = lookup("MEDSTOCK_TIMELINE_MONTHS") {
            self.timeline_months = months.trim().parse().unwrap_or(self.timeline_months);
        }

        if let Some(freq) = lookup("MEDSTOCK_PAY_FREQUENCY_DAYS") {
            self.forecast.pay_frequency_days =
                freq.trim().parse().unwrap_or(self.forecast.pay_frequency_days);
        }

        if let Some(months) = lookup("MEDSTOCK_FORECAST_MONTHS") {
            self.forecast.forecast_months =
                months.trim().parse().unwrap_or(self.forecast.forecast_months);
        }

        if let Some(mode) = lookup("MEDSTOCK_BOUNDARY_MODE") {
            self.forecast.boundary_mode = mode.parse().unwrap_or(self.forecast.boundary_mode);
        }

        if let Some(mode) = lookup("MEDSTOCK_QUANTITY_MODE") {
            self.forecast.quantity_mode = mode.parse().unwrap_or(self.forecast.quantity_mode);
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }

        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            errors.push(format!(
                "Invalid api_url '{}'. Must start with http:// or https://",
                self.api_url
            ));
        }

        if !TIMELINE_MONTH_OPTIONS.contains(&self.timeline_months) {
            errors.push(format!(
                "Invalid timeline_months {}. Must be one of: {:?}",
                self.timeline_months, TIMELINE_MONTH_OPTIONS
            ));
        }

        if let Err(e) = self.forecast.validate() {
            errors.push(format!("Invalid forecast settings: {}", e));
        }

        if self.alerts.refill_soon_days < 0 {
            errors.push("alerts.refill_soon_days must not be negative".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }
}
