//! Store module for the ShopMetrics dashboard core.
//!
//! This module provides the dataset-acquisition abstraction behind the
//! query engine and the report derivations. Backends serve immutable
//! datasets as raw JSON bytes keyed by [`DatasetKey`]; the typed
//! [`DataService`] wrapper handles deserialization. The compiled-in
//! memory backend is the dataset of record; the fixture backend reads the
//! same datasets from JSON files, standing in for a real data source.

use serde::de::DeserializeOwned;
use shopmetrics_types::{
	ConfigSchema, CustomerCohort, DatasetKey, KpiBaseline, Order, SalesPoint, TopProduct,
	TrafficSource,
};
use thiserror::Error;

/// Re-export implementations
pub mod implementations {
	pub mod fixture;
	pub mod memory;
}

/// Compiled-in seed datasets.
pub mod seed;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
	/// Error that occurs when a requested dataset is not found.
	#[error("Not found")]
	NotFound,
	/// Error that occurs during serialization/deserialization.
	#[error("Serialization error: {0}")]
	Serialization(String),
	/// Error that occurs in the store backend.
	#[error("Backend error: {0}")]
	Backend(String),
	/// Error that occurs during configuration validation.
	#[error("Configuration error: {0}")]
	Configuration(String),
}

/// Trait defining the low-level interface for store backends.
///
/// This trait must be implemented by any backend that wants to serve
/// datasets to the dashboard core. Backends are read-only: the datasets
/// are fixed at process start and never mutated, so the interface has no
/// write operations.
pub trait StoreInterface: Send + Sync {
	/// Retrieves the raw JSON bytes of a dataset.
	fn fetch_bytes(&self, key: DatasetKey) -> Result<Vec<u8>, StoreError>;

	/// Checks whether the backend can serve a dataset.
	fn contains(&self, key: DatasetKey) -> Result<bool, StoreError>;

	/// Returns the configuration schema for validation.
	fn config_schema(&self) -> Box<dyn ConfigSchema>;
}

/// Type alias for store factory functions.
///
/// This is the function signature that all store implementations must
/// provide to create instances of their store interface.
pub type StoreFactory = fn(&toml::Value) -> Result<Box<dyn StoreInterface>, StoreError>;

/// Get all registered store implementations.
///
/// Returns a vector of (name, factory) tuples for all available store
/// implementations. This is used by the session builder to register all
/// implementations by name.
pub fn get_all_implementations() -> Vec<(&'static str, StoreFactory)> {
	use implementations::{fixture, memory};

	vec![
		("memory", memory::create_store as StoreFactory),
		("fixture", fixture::create_store as StoreFactory),
	]
}

/// High-level store service that provides typed dataset access.
///
/// The DataService wraps a low-level store backend and deserializes the
/// raw dataset bytes into the shared data model types.
pub struct DataService {
	/// The underlying store backend implementation.
	backend: Box<dyn StoreInterface>,
}

impl DataService {
	/// Creates a new DataService with the specified backend.
	pub fn new(backend: Box<dyn StoreInterface>) -> Self {
		Self { backend }
	}

	/// Retrieves and deserializes a dataset from the backend.
	pub fn dataset<T: DeserializeOwned>(&self, key: DatasetKey) -> Result<T, StoreError> {
		let bytes = self.backend.fetch_bytes(key)?;
		serde_json::from_slice(&bytes).map_err(|e| StoreError::Serialization(e.to_string()))
	}

	/// Checks whether the backend can serve a dataset.
	pub fn contains(&self, key: DatasetKey) -> Result<bool, StoreError> {
		self.backend.contains(key)
	}

	/// The full order dataset in fixed insertion order.
	///
	/// This is the sole order-acquisition call: the query engine and the
	/// report derivations operate on the sequence returned here.
	pub fn orders(&self) -> Result<Vec<Order>, StoreError> {
		self.dataset(DatasetKey::Orders)
	}

	/// Monthly sales trend series.
	pub fn sales_trend(&self) -> Result<Vec<SalesPoint>, StoreError> {
		self.dataset(DatasetKey::SalesTrend)
	}

	/// Top-selling products list.
	pub fn top_products(&self) -> Result<Vec<TopProduct>, StoreError> {
		self.dataset(DatasetKey::TopProducts)
	}

	/// Traffic source breakdown.
	pub fn traffic_sources(&self) -> Result<Vec<TrafficSource>, StoreError> {
		self.dataset(DatasetKey::TrafficSources)
	}

	/// Monthly new-customer counts.
	pub fn customer_cohorts(&self) -> Result<Vec<CustomerCohort>, StoreError> {
		self.dataset(DatasetKey::CustomerCohorts)
	}

	/// Prior-period KPI baseline.
	pub fn kpi_baseline(&self) -> Result<KpiBaseline, StoreError> {
		self.dataset(DatasetKey::KpiBaseline)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use implementations::memory::MemoryStore;

	fn service() -> DataService {
		DataService::new(Box::new(MemoryStore::new().unwrap()))
	}

	#[test]
	fn test_orders_round_trip_through_backend() {
		let orders = service().orders().unwrap();
		assert_eq!(orders.len(), 12);
		assert_eq!(orders[0].id, "ORD001");
		assert_eq!(orders[11].id, "ORD012");
	}

	#[test]
	fn test_typed_accessors_cover_every_dataset() {
		let service = service();
		assert_eq!(service.sales_trend().unwrap().len(), 6);
		assert_eq!(service.top_products().unwrap().len(), 5);
		assert_eq!(service.traffic_sources().unwrap().len(), 4);
		assert_eq!(service.customer_cohorts().unwrap().len(), 6);
		assert!(service.kpi_baseline().unwrap().order_count > 0);
	}

	#[test]
	fn test_dataset_type_mismatch_is_a_serialization_error() {
		// Orders cannot deserialize as a baseline struct.
		let result: Result<KpiBaseline, _> = service().dataset(DatasetKey::Orders);
		assert!(matches!(result, Err(StoreError::Serialization(_))));
	}
}
