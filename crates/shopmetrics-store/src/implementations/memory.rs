//! In-memory store backend implementation for the dashboard core.
//!
//! This backend serves the compiled-in seed datasets and is the dataset
//! of record: every collection is serialized once at construction and
//! held in memory for the process lifetime.

use crate::{seed, StoreError, StoreInterface};
use serde::Serialize;
use shopmetrics_types::{ConfigSchema, DatasetKey, Schema, ValidationError};
use std::collections::HashMap;

/// In-memory store implementation.
///
/// Datasets are seeded at construction and never change afterwards, so
/// every fetch is an infallible lookup in practice.
pub struct MemoryStore {
	/// Seeded datasets keyed by collection.
	datasets: HashMap<DatasetKey, Vec<u8>>,
}

impl MemoryStore {
	/// Creates a new MemoryStore seeded with every dataset.
	pub fn new() -> Result<Self, StoreError> {
		let mut datasets = HashMap::new();
		datasets.insert(DatasetKey::Orders, encode(&*seed::ORDERS)?);
		datasets.insert(DatasetKey::SalesTrend, encode(&*seed::SALES_TREND)?);
		datasets.insert(DatasetKey::TopProducts, encode(&*seed::TOP_PRODUCTS)?);
		datasets.insert(DatasetKey::TrafficSources, encode(&*seed::TRAFFIC_SOURCES)?);
		datasets.insert(DatasetKey::CustomerCohorts, encode(&*seed::CUSTOMER_COHORTS)?);
		datasets.insert(DatasetKey::KpiBaseline, encode(&*seed::KPI_BASELINE)?);
		Ok(Self { datasets })
	}
}

fn encode<T: Serialize>(data: &T) -> Result<Vec<u8>, StoreError> {
	serde_json::to_vec(data).map_err(|e| StoreError::Serialization(e.to_string()))
}

impl StoreInterface for MemoryStore {
	fn fetch_bytes(&self, key: DatasetKey) -> Result<Vec<u8>, StoreError> {
		self.datasets.get(&key).cloned().ok_or(StoreError::NotFound)
	}

	fn contains(&self, key: DatasetKey) -> Result<bool, StoreError> {
		Ok(self.datasets.contains_key(&key))
	}

	fn config_schema(&self) -> Box<dyn ConfigSchema> {
		Box::new(MemoryStoreSchema)
	}
}

/// Configuration schema for MemoryStore.
pub struct MemoryStoreSchema;

impl ConfigSchema for MemoryStoreSchema {
	fn validate(&self, config: &toml::Value) -> Result<(), ValidationError> {
		// Memory store has no required configuration
		let schema = Schema::new(vec![], vec![]);
		schema.validate(config)
	}
}

/// Factory function to create a memory store backend from configuration.
///
/// Configuration parameters:
/// - None required for memory store
pub fn create_store(_config: &toml::Value) -> Result<Box<dyn StoreInterface>, StoreError> {
	Ok(Box::new(MemoryStore::new()?))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_every_dataset_is_seeded() {
		let store = MemoryStore::new().unwrap();
		for key in DatasetKey::all() {
			assert!(store.contains(key).unwrap(), "missing dataset {:?}", key);
			assert!(!store.fetch_bytes(key).unwrap().is_empty());
		}
	}

	#[test]
	fn test_fetch_is_stable_across_calls() {
		let store = MemoryStore::new().unwrap();
		let first = store.fetch_bytes(DatasetKey::Orders).unwrap();
		let second = store.fetch_bytes(DatasetKey::Orders).unwrap();
		assert_eq!(first, second);
	}

	#[test]
	fn test_factory_ignores_empty_config() {
		let config = toml::Value::Table(toml::map::Map::new());
		assert!(create_store(&config).is_ok());
	}

	#[test]
	fn test_schema_accepts_empty_table() {
		let config = toml::Value::Table(toml::map::Map::new());
		assert!(MemoryStoreSchema.validate(&config).is_ok());
	}
}
