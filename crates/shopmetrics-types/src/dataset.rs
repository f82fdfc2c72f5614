//! Dataset identifiers for the seeded data collections.

use std::str::FromStr;

/// Keys for the data collections a store backend can serve.
///
/// This enum provides type safety for dataset access by replacing string
/// literals with strongly typed variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKey {
	/// The order dataset of record.
	Orders,
	/// Monthly sales trend series.
	SalesTrend,
	/// Top-selling products list.
	TopProducts,
	/// Traffic source breakdown.
	TrafficSources,
	/// Monthly new-customer counts.
	CustomerCohorts,
	/// Prior-period KPI baseline.
	KpiBaseline,
}

impl DatasetKey {
	/// Returns the string representation of the dataset key.
	pub fn as_str(&self) -> &'static str {
		match self {
			DatasetKey::Orders => "orders",
			DatasetKey::SalesTrend => "sales_trend",
			DatasetKey::TopProducts => "top_products",
			DatasetKey::TrafficSources => "traffic_sources",
			DatasetKey::CustomerCohorts => "customer_cohorts",
			DatasetKey::KpiBaseline => "kpi_baseline",
		}
	}

	/// Returns an iterator over all DatasetKey variants.
	pub fn all() -> impl Iterator<Item = Self> {
		[
			Self::Orders,
			Self::SalesTrend,
			Self::TopProducts,
			Self::TrafficSources,
			Self::CustomerCohorts,
			Self::KpiBaseline,
		]
		.into_iter()
	}
}

impl FromStr for DatasetKey {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"orders" => Ok(Self::Orders),
			"sales_trend" => Ok(Self::SalesTrend),
			"top_products" => Ok(Self::TopProducts),
			"traffic_sources" => Ok(Self::TrafficSources),
			"customer_cohorts" => Ok(Self::CustomerCohorts),
			"kpi_baseline" => Ok(Self::KpiBaseline),
			_ => Err(()),
		}
	}
}

impl From<DatasetKey> for &'static str {
	fn from(key: DatasetKey) -> Self {
		key.as_str()
	}
}
