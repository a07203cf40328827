//! # Configuration Management Module
//!
//! ## Purpose
//! Centralized configuration for the listing search engine, supporting TOML
//! files and environment variables with validation and type-safe access.
//!
//! ## Input/Output Specification
//! - **Input**: Configuration files (TOML), environment variables
//! - **Output**: Validated configuration structs with defaults and overrides
//! - **Validation**: Type checking, range validation
//!
//! ## Configuration Sources (in order of precedence)
//! 1. Environment variables
//! 2. Configuration files
//! 3. Default values (lowest priority)
//!
//! ## Usage
//! ```rust,ignore
//! use crate::config::Config;
//!
//! let config = Config::from_file("config.toml")?;
//! println!("Dataset size: {}", config.generator.default_count);
//! ```

use crate::errors::{Result, SearchError};
use crate::SortKey;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure containing all system settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Mock-data generator settings
    pub generator: GeneratorConfig,
    /// Search engine behavior
    pub search: SearchEngineConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Mock-data generator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of listings generated per dataset
    pub default_count: usize,
}

/// Search engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchEngineConfig {
    /// Maximum suggestions returned for a partial query
    pub suggestion_limit: usize,
    /// Default result ordering
    pub default_sort: SortKey,
    /// Maximum accepted query length in characters
    pub max_query_length: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Enable structured JSON logging
    pub json_format: bool,
}

impl Config {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::from_file("config.toml")
    }

    /// Load configuration from a specific file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::warn!("Configuration file not found: {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| SearchError::Config {
            message: format!("Failed to read config file {:?}: {}", path, e),
        })?;

        let mut config: Config = toml::from_str(&content).map_err(|e| SearchError::Config {
            message: format!("Failed to parse config file {:?}: {}", path, e),
        })?;

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(level) = std::env::var("REALTY_SEARCH_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(count) = std::env::var("REALTY_SEARCH_LISTING_COUNT") {
            self.generator.default_count = count.parse().map_err(|_| SearchError::Config {
                message: "Invalid count in REALTY_SEARCH_LISTING_COUNT".to_string(),
            })?;
        }
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.generator.default_count > 100_000 {
            return Err(SearchError::ValidationFailed {
                field: "generator.default_count".to_string(),
                reason: "Dataset size above 100000 is not supported".to_string(),
            });
        }

        if self.search.max_query_length == 0 {
            return Err(SearchError::ValidationFailed {
                field: "search.max_query_length".to_string(),
                reason: "Maximum query length cannot be zero".to_string(),
            });
        }

        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(SearchError::ValidationFailed {
                field: "logging.level".to_string(),
                reason: format!("Unknown log level: {}", other),
            }),
        }
    }

    /// Get configuration as TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| SearchError::Config {
            message: format!("Failed to serialize config to TOML: {}", e),
        })
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = self.to_toml()?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::default(),
            search: SearchEngineConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { default_count: 100 }
    }
}

impl Default for SearchEngineConfig {
    fn default() -> Self {
        Self {
            suggestion_limit: 10,
            default_sort: SortKey::Latest,
            max_query_length: 100,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config::default();
        let toml_text = config.to_toml().unwrap();
        let parsed: Config = toml::from_str(&toml_text).unwrap();
        assert_eq!(parsed.generator.default_count, config.generator.default_count);
        assert_eq!(parsed.search.suggestion_limit, config.search.suggestion_limit);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = Config::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.search.max_query_length = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.generator.default_count = 1_000_000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file_with_partial_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[generator]\ndefault_count = 25\n").unwrap();
        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.generator.default_count, 25);
        assert_eq!(config.search.suggestion_limit, 10);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = Config::from_file("does-not-exist.toml").unwrap();
        assert_eq!(config.generator.default_count, 100);
    }
}
