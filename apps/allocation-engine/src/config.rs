//! Configuration module for the allocation engine.
//!
//! Provides configuration loading and validation for the treasury core.
//!
//! # Usage
//!
//! ```rust,ignore
//! use allocation_engine::config::{TreasuryConfig, load_config};
//!
//! // Load from default path (config.yaml)
//! let config = load_config(None)?;
//!
//! // Load from custom path
//! let config = load_config(Some("custom/config.yaml"))?;
//!
//! println!("exposure limit: {}bp", config.max_single_exposure_bp);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::portfolio::MAX_SINGLE_EXPOSURE_CAP_BP;
use crate::domain::shared::BP_SCALE;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Treasury core configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TreasuryConfig {
    /// Maximum single-exposure ratio in basis points (at most 5000).
    #[serde(default = "default_max_single_exposure_bp")]
    pub max_single_exposure_bp: u64,
    /// Confidence level for VaR estimates in basis points.
    #[serde(default = "default_var_confidence_bp")]
    pub var_confidence_bp: u64,
}

const fn default_max_single_exposure_bp() -> u64 {
    2_500
}

const fn default_var_confidence_bp() -> u64 {
    9_500
}

impl Default for TreasuryConfig {
    fn default() -> Self {
        Self {
            max_single_exposure_bp: default_max_single_exposure_bp(),
            var_confidence_bp: default_var_confidence_bp(),
        }
    }
}

impl TreasuryConfig {
    /// Validate configured values against the domain bounds.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for an exposure limit above 5000bp or
    /// a confidence level above 10000bp.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_single_exposure_bp > MAX_SINGLE_EXPOSURE_CAP_BP {
            return Err(ConfigError::ValidationError(format!(
                "max_single_exposure_bp must be at most {MAX_SINGLE_EXPOSURE_CAP_BP}, got {}",
                self.max_single_exposure_bp
            )));
        }
        if self.var_confidence_bp > BP_SCALE {
            return Err(ConfigError::ValidationError(format!(
                "var_confidence_bp must be at most {BP_SCALE}, got {}",
                self.var_confidence_bp
            )));
        }
        Ok(())
    }
}

/// Load configuration from a YAML file.
///
/// Defaults to `config.yaml` when no path is given.
///
/// # Errors
///
/// Returns error if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<TreasuryConfig, ConfigError> {
    let path = path.unwrap_or("config.yaml");
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
        path: path.to_string(),
        source,
    })?;
    load_config_from_string(&contents)
}

/// Load configuration from a YAML string.
///
/// # Errors
///
/// Returns error if the YAML cannot be parsed or fails validation.
pub fn load_config_from_string(yaml: &str) -> Result<TreasuryConfig, ConfigError> {
    let config: TreasuryConfig = serde_yaml_bw::from_str(yaml)?;
    config.validate()?;
    Ok(config)
}
