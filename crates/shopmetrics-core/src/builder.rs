//! Builder for constructing dashboard sessions.
//!
//! Composes a [`DashboardSession`] from a validated configuration and a
//! map of store backend factories. The primary backend is selected by
//! name, validated against its own configuration schema, and the order
//! dataset is loaded exactly once: the dataset is fixed at startup.

use crate::DashboardSession;
use shopmetrics_config::Config;
use shopmetrics_report::{ReportOptions, ReportService};
use shopmetrics_store::{get_all_implementations, DataService, StoreError, StoreFactory};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur during session construction.
#[derive(Debug, Error)]
pub enum BuilderError {
	/// Error that occurs when the configuration is inconsistent.
	#[error("Configuration error: {0}")]
	Config(String),
	/// Error that occurs when the store backend cannot be built or read.
	#[error("Store error: {0}")]
	Store(#[from] StoreError),
}

/// Returns the built-in store factories, keyed by implementation name.
pub fn default_store_factories() -> HashMap<String, StoreFactory> {
	get_all_implementations()
		.into_iter()
		.map(|(name, factory)| (name.to_string(), factory))
		.collect()
}

/// Builder for constructing a DashboardSession with pluggable store
/// backends.
pub struct SessionBuilder {
	config: Config,
}

impl SessionBuilder {
	/// Creates a new SessionBuilder with the given configuration.
	pub fn new(config: Config) -> Self {
		Self { config }
	}

	/// Builds the session using the given store factories.
	pub fn build(
		self,
		factories: HashMap<String, StoreFactory>,
	) -> Result<DashboardSession, BuilderError> {
		let primary = &self.config.store.primary;

		let factory = factories.get(primary).ok_or_else(|| {
			BuilderError::Config(format!("Unknown store implementation: {}", primary))
		})?;
		let backend_config = self.config.store.implementations.get(primary).ok_or_else(|| {
			BuilderError::Config(format!("Missing implementation config for: {}", primary))
		})?;

		let backend = factory(backend_config)?;
		backend
			.config_schema()
			.validate(backend_config)
			.map_err(|e| BuilderError::Config(e.to_string()))?;

		let data = Arc::new(DataService::new(backend));
		let orders = data.orders()?;

		let options = ReportOptions {
			recent_orders_limit: self.config.report.recent_orders_limit,
			trailing_days: self.config.report.trailing_days,
		};
		let reports = ReportService::with_options(Arc::clone(&data), options);

		tracing::info!(
			service = %self.config.service.name,
			backend = %primary,
			orders = orders.len(),
			"Initialized dashboard session"
		);

		Ok(DashboardSession::new(reports, orders))
	}

	/// Builds the session using the built-in store factories.
	pub fn build_default(self) -> Result<DashboardSession, BuilderError> {
		self.build(default_store_factories())
	}
}
