//! Dashboard and analytics read models for the ShopMetrics core.
//!
//! This module derives the typed payloads behind the dashboard widgets:
//! the KPI summary, the recent-orders list, and the chart series for the
//! analytics page. Derivations are synchronous reads over the store
//! datasets; nothing here holds mutable state.

use chrono::Utc;
use rust_decimal::Decimal;
use shopmetrics_store::{DataService, StoreError};
use shopmetrics_types::{
	CustomerCohort, KpiSummary, Order, OrderStatus, ReportPeriod, SalesPoint, TopProduct,
	TrafficSource,
};
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while deriving report data.
#[derive(Debug, Error)]
pub enum ReportError {
	/// Error that occurs when a dataset cannot be read.
	#[error("Store error: {0}")]
	Store(#[from] StoreError),
}

/// Tunable report parameters.
///
/// The defaults match the source dashboard: five rows in the
/// recent-orders widget and a trailing 30-day reporting period.
#[derive(Debug, Clone)]
pub struct ReportOptions {
	/// Number of rows in the recent-orders widget.
	pub recent_orders_limit: usize,
	/// Length of the default reporting period in days.
	pub trailing_days: u32,
}

impl Default for ReportOptions {
	fn default() -> Self {
		Self {
			recent_orders_limit: 5,
			trailing_days: 30,
		}
	}
}

/// Service that derives dashboard and analytics read models.
pub struct ReportService {
	/// Typed dataset access.
	data: Arc<DataService>,
	/// Widget tuning; defaults match the source dashboard.
	options: ReportOptions,
}

impl ReportService {
	/// Creates a new ReportService with default options.
	pub fn new(data: Arc<DataService>) -> Self {
		Self::with_options(data, ReportOptions::default())
	}

	/// Creates a new ReportService with the specified options.
	pub fn with_options(data: Arc<DataService>, options: ReportOptions) -> Self {
		Self { data, options }
	}

	/// Derives the headline KPI figures.
	///
	/// Revenue sums the totals of non-cancelled orders; the order count
	/// covers the whole dataset; the average order value is revenue over
	/// the non-cancelled count (zero when there are none). Change
	/// percentages are computed against the seeded prior-period baseline
	/// and rounded to one decimal place.
	pub fn kpi_summary(&self) -> Result<KpiSummary, ReportError> {
		let orders = self.data.orders()?;
		let baseline = self.data.kpi_baseline()?;

		let billable: Vec<&Order> = orders
			.iter()
			.filter(|o| o.status != OrderStatus::Cancelled)
			.collect();

		let total_revenue: Decimal = billable.iter().map(|o| o.total).sum();
		let order_count = orders.len() as u64;
		let average_order_value = if billable.is_empty() {
			Decimal::ZERO
		} else {
			(total_revenue / Decimal::from(billable.len() as u64)).round_dp(2)
		};

		let summary = KpiSummary {
			total_revenue,
			total_revenue_change: percent_change(total_revenue, baseline.total_revenue),
			order_count,
			order_count_change: percent_change(
				Decimal::from(order_count),
				Decimal::from(baseline.order_count),
			),
			average_order_value,
			average_order_value_change: percent_change(
				average_order_value,
				baseline.average_order_value,
			),
		};

		tracing::debug!(
			revenue = %summary.total_revenue,
			orders = summary.order_count,
			"Derived KPI summary"
		);
		Ok(summary)
	}

	/// The most recent orders, newest first.
	///
	/// The dataset is ordered oldest to newest, so this is its tail
	/// reversed, capped at the configured widget limit.
	pub fn recent_orders(&self) -> Result<Vec<Order>, ReportError> {
		let orders = self.data.orders()?;
		let take = self.options.recent_orders_limit.min(orders.len());
		let mut recent = orders[orders.len() - take..].to_vec();
		recent.reverse();
		Ok(recent)
	}

	/// Monthly sales trend series for the dashboard chart.
	pub fn sales_trend(&self) -> Result<Vec<SalesPoint>, ReportError> {
		Ok(self.data.sales_trend()?)
	}

	/// Top-selling products list.
	pub fn top_products(&self) -> Result<Vec<TopProduct>, ReportError> {
		Ok(self.data.top_products()?)
	}

	/// Traffic source breakdown.
	pub fn traffic_sources(&self) -> Result<Vec<TrafficSource>, ReportError> {
		Ok(self.data.traffic_sources()?)
	}

	/// Monthly new-customer acquisition counts.
	pub fn customer_acquisition(&self) -> Result<Vec<CustomerCohort>, ReportError> {
		Ok(self.data.customer_cohorts()?)
	}

	/// The default reporting period: the trailing configured number of
	/// days ending today.
	pub fn default_period(&self) -> ReportPeriod {
		ReportPeriod::trailing_days(Utc::now().date_naive(), self.options.trailing_days)
	}
}

/// Percentage share of total visits per traffic source.
///
/// This is the label derivation behind the traffic pie chart. A zero
/// total yields zero shares rather than a division error.
pub fn traffic_share(sources: &[TrafficSource]) -> Vec<(String, f64)> {
	let total: u64 = sources.iter().map(|s| s.visits).sum();
	sources
		.iter()
		.map(|s| {
			let share = if total == 0 {
				0.0
			} else {
				s.visits as f64 * 100.0 / total as f64
			};
			(s.name.clone(), share)
		})
		.collect()
}

fn percent_change(current: Decimal, baseline: Decimal) -> Decimal {
	if baseline.is_zero() {
		return Decimal::ZERO;
	}
	((current - baseline) / baseline * Decimal::ONE_HUNDRED).round_dp(1)
}
