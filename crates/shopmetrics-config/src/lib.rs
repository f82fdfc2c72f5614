//! Configuration module for the ShopMetrics dashboard core.
//!
//! This module provides structures and utilities for managing the
//! dashboard configuration. It supports loading configuration from TOML
//! files and provides validation to ensure all required values are
//! properly set before a session is built.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error that occurs during file I/O operations.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
	/// Error that occurs when parsing TOML configuration.
	#[error("Configuration error: {0}")]
	Parse(String),
	/// Error that occurs when configuration validation fails.
	#[error("Validation error: {0}")]
	Validation(String),
}

impl From<toml::de::Error> for ConfigError {
	fn from(err: toml::de::Error) -> Self {
		// Extract just the message without the huge input dump
		let message = err.message().to_string();
		ConfigError::Parse(message)
	}
}

/// Main configuration structure for the dashboard core.
///
/// This structure contains all configuration sections required to build
/// a session: instance identity, the store backend selection, and the
/// report widget tuning.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
	/// Configuration specific to this dashboard instance.
	#[serde(default)]
	pub service: ServiceSettings,
	/// Configuration for the store backend.
	pub store: StoreSettings,
	/// Configuration for the report widgets.
	#[serde(default)]
	pub report: ReportSettings,
}

/// Configuration specific to this dashboard instance.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceSettings {
	/// Instance name, used for log correlation.
	#[serde(default = "default_service_name")]
	pub name: String,
}

impl Default for ServiceSettings {
	fn default() -> Self {
		Self {
			name: default_service_name(),
		}
	}
}

fn default_service_name() -> String {
	"shopmetrics".to_string()
}

/// Configuration for the store backend.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreSettings {
	/// Which implementation to use as primary.
	pub primary: String,
	/// Map of store implementation names to their configurations.
	/// Each implementation has its own configuration format stored as
	/// raw TOML values and validated by the backend's schema.
	#[serde(default)]
	pub implementations: HashMap<String, toml::Value>,
}

/// Configuration for the report widgets.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportSettings {
	/// Number of rows in the recent-orders widget.
	/// Defaults to 5 rows if not specified.
	#[serde(default = "default_recent_orders_limit")]
	pub recent_orders_limit: usize,
	/// Length of the default reporting period in days.
	/// Defaults to the trailing 30 days if not specified.
	#[serde(default = "default_trailing_days")]
	pub trailing_days: u32,
}

impl Default for ReportSettings {
	fn default() -> Self {
		Self {
			recent_orders_limit: default_recent_orders_limit(),
			trailing_days: default_trailing_days(),
		}
	}
}

/// Returns the default recent-orders widget size.
fn default_recent_orders_limit() -> usize {
	5
}

/// Returns the default reporting period length in days.
fn default_trailing_days() -> u32 {
	30
}

impl Config {
	/// Loads and validates configuration from a TOML file.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let content = std::fs::read_to_string(path)?;
		content.parse()
	}

	/// Validates the configuration values.
	fn validate(&self) -> Result<(), ConfigError> {
		if self.service.name.trim().is_empty() {
			return Err(ConfigError::Validation(
				"service.name must not be empty".to_string(),
			));
		}
		if self.store.primary.trim().is_empty() {
			return Err(ConfigError::Validation(
				"store.primary must not be empty".to_string(),
			));
		}
		if !self.store.implementations.contains_key(&self.store.primary) {
			return Err(ConfigError::Validation(format!(
				"store.primary '{}' has no implementation section",
				self.store.primary
			)));
		}
		if self.report.recent_orders_limit == 0 {
			return Err(ConfigError::Validation(
				"report.recent_orders_limit must be at least 1".to_string(),
			));
		}
		if self.report.trailing_days == 0 {
			return Err(ConfigError::Validation(
				"report.trailing_days must be at least 1".to_string(),
			));
		}
		Ok(())
	}
}

impl FromStr for Config {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let config: Config = toml::from_str(s)?;
		config.validate()?;
		Ok(config)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use tempfile::tempdir;

	const MINIMAL: &str = r#"
[store]
primary = "memory"

[store.implementations.memory]
"#;

	#[test]
	fn test_minimal_config_applies_defaults() {
		let config: Config = MINIMAL.parse().unwrap();
		assert_eq!(config.service.name, "shopmetrics");
		assert_eq!(config.store.primary, "memory");
		assert_eq!(config.report.recent_orders_limit, 5);
		assert_eq!(config.report.trailing_days, 30);
	}

	#[test]
	fn test_full_config_round_trip() {
		let content = r#"
[service]
name = "shopmetrics-dev"

[store]
primary = "fixture"

[store.implementations.fixture]
path = "fixtures"

[report]
recent_orders_limit = 3
trailing_days = 7
"#;
		let config: Config = content.parse().unwrap();
		assert_eq!(config.service.name, "shopmetrics-dev");
		assert_eq!(config.store.primary, "fixture");
		assert_eq!(config.report.recent_orders_limit, 3);
		assert_eq!(config.report.trailing_days, 7);
		let fixture = &config.store.implementations["fixture"];
		assert_eq!(fixture.get("path").and_then(|v| v.as_str()), Some("fixtures"));
	}

	#[test]
	fn test_from_file() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("config.toml");
		std::fs::write(&path, MINIMAL).unwrap();

		let config = Config::from_file(&path).unwrap();
		assert_eq!(config.store.primary, "memory");
	}

	#[test]
	fn test_missing_file_is_an_io_error() {
		let result = Config::from_file("does-not-exist.toml");
		assert!(matches!(result, Err(ConfigError::Io(_))));
	}

	#[test]
	fn test_primary_without_implementation_section() {
		let content = r#"
[store]
primary = "fixture"

[store.implementations.memory]
"#;
		let result: Result<Config, _> = content.parse();
		assert!(matches!(result, Err(ConfigError::Validation(_))));
	}

	#[test]
	fn test_zero_widget_limit_is_rejected() {
		let content = r#"
[store]
primary = "memory"

[store.implementations.memory]

[report]
recent_orders_limit = 0
"#;
		let result: Result<Config, _> = content.parse();
		assert!(matches!(result, Err(ConfigError::Validation(_))));
	}

	#[test]
	fn test_malformed_toml_is_a_parse_error() {
		let result: Result<Config, _> = "store = ".parse();
		assert!(matches!(result, Err(ConfigError::Parse(_))));
	}
}
