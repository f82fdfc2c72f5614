//! Read-only JSON fixture store backend.
//!
//! This backend serves datasets from `<key>.json` files under a
//! configured directory. It exists to honor the substitution contract of
//! the store interface: a real data source can replace the compiled-in
//! seed without touching the query engine. Files are only ever read;
//! nothing is written back.

use crate::{StoreError, StoreInterface};
use shopmetrics_types::{ConfigSchema, DatasetKey, Field, FieldType, Schema, ValidationError};
use std::path::PathBuf;

/// File-backed fixture store implementation.
pub struct FixtureStore {
	/// Base directory the dataset files live in.
	base_path: PathBuf,
}

impl FixtureStore {
	/// Creates a new FixtureStore reading from the specified directory.
	pub fn new(base_path: PathBuf) -> Self {
		Self { base_path }
	}

	/// Converts a dataset key to its file path, e.g. `orders.json`.
	fn dataset_path(&self, key: DatasetKey) -> PathBuf {
		self.base_path.join(format!("{}.json", key.as_str()))
	}
}

impl StoreInterface for FixtureStore {
	fn fetch_bytes(&self, key: DatasetKey) -> Result<Vec<u8>, StoreError> {
		let path = self.dataset_path(key);
		tracing::debug!(dataset = key.as_str(), path = %path.display(), "Reading fixture");

		match std::fs::read(&path) {
			Ok(data) => Ok(data),
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(StoreError::NotFound),
			Err(e) => Err(StoreError::Backend(e.to_string())),
		}
	}

	fn contains(&self, key: DatasetKey) -> Result<bool, StoreError> {
		Ok(self.dataset_path(key).exists())
	}

	fn config_schema(&self) -> Box<dyn ConfigSchema> {
		Box::new(FixtureStoreSchema)
	}
}

/// Configuration schema for FixtureStore.
pub struct FixtureStoreSchema;

impl ConfigSchema for FixtureStoreSchema {
	fn validate(&self, config: &toml::Value) -> Result<(), ValidationError> {
		let schema = Schema::new(
			vec![
				Field::new("path", FieldType::String).with_validator(|value| {
					let path = value.as_str().unwrap_or_default();
					if path.trim().is_empty() {
						Err("must not be empty".to_string())
					} else {
						Ok(())
					}
				}),
			],
			vec![],
		);
		schema.validate(config)
	}
}

/// Factory function to create a fixture store backend from configuration.
///
/// Configuration parameters:
/// - `path`: Directory containing the `<dataset>.json` files (required)
pub fn create_store(config: &toml::Value) -> Result<Box<dyn StoreInterface>, StoreError> {
	FixtureStoreSchema
		.validate(config)
		.map_err(|e| StoreError::Configuration(e.to_string()))?;

	let path = config
		.get("path")
		.and_then(|v| v.as_str())
		.map(PathBuf::from)
		.ok_or_else(|| StoreError::Configuration("Missing fixture path".to_string()))?;

	Ok(Box::new(FixtureStore::new(path)))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::seed;
	use shopmetrics_types::Order;
	use tempfile::tempdir;

	fn fixture_config(path: &str) -> toml::Value {
		let mut map = toml::map::Map::new();
		map.insert("path".to_string(), toml::Value::String(path.to_string()));
		toml::Value::Table(map)
	}

	#[test]
	fn test_reads_dataset_written_to_disk() {
		let dir = tempdir().unwrap();
		let payload = serde_json::to_vec(&*seed::ORDERS).unwrap();
		std::fs::write(dir.path().join("orders.json"), &payload).unwrap();

		let store = FixtureStore::new(dir.path().to_path_buf());
		let bytes = store.fetch_bytes(DatasetKey::Orders).unwrap();
		let orders: Vec<Order> = serde_json::from_slice(&bytes).unwrap();
		assert_eq!(orders.len(), 12);
		assert_eq!(orders[0].id, "ORD001");
	}

	#[test]
	fn test_missing_dataset_is_not_found() {
		let dir = tempdir().unwrap();
		let store = FixtureStore::new(dir.path().to_path_buf());
		assert!(matches!(
			store.fetch_bytes(DatasetKey::SalesTrend),
			Err(StoreError::NotFound)
		));
		assert!(!store.contains(DatasetKey::SalesTrend).unwrap());
	}

	#[test]
	fn test_factory_requires_path() {
		let config = toml::Value::Table(toml::map::Map::new());
		assert!(matches!(
			create_store(&config),
			Err(StoreError::Configuration(_))
		));
	}

	#[test]
	fn test_factory_rejects_blank_path() {
		assert!(matches!(
			create_store(&fixture_config("  ")),
			Err(StoreError::Configuration(_))
		));
	}

	#[test]
	fn test_factory_builds_store_from_valid_config() {
		let dir = tempdir().unwrap();
		let store = create_store(&fixture_config(dir.path().to_str().unwrap())).unwrap();
		assert!(!store.contains(DatasetKey::Orders).unwrap());
	}
}
