//! Read-model types for the dashboard and analytics views.
//!
//! These are the typed payloads the presentation layer renders as KPI
//! cards, chart series, and widget lists. All of them are derived or
//! seeded data; none are persisted.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Headline KPI figures for the dashboard, with change percentages
/// computed against the prior-period baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSummary {
	/// Revenue over the dataset, cancelled orders excluded.
	pub total_revenue: Decimal,
	/// Percentage change of revenue vs. the baseline.
	pub total_revenue_change: Decimal,
	/// Number of orders in the dataset.
	pub order_count: u64,
	/// Percentage change of the order count vs. the baseline.
	pub order_count_change: Decimal,
	/// Average order value over the dataset; zero when it is empty.
	pub average_order_value: Decimal,
	/// Percentage change of the average order value vs. the baseline.
	pub average_order_value_change: Decimal,
}

/// Prior-period aggregates that KPI change percentages are computed
/// against. Seeded alongside the order dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiBaseline {
	pub total_revenue: Decimal,
	pub order_count: u64,
	pub average_order_value: Decimal,
}

/// One point of the sales trend series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesPoint {
	/// Period label, e.g. a month abbreviation.
	pub time: String,
	/// Sales amount for the period.
	pub sales: Decimal,
}

/// A top-selling product entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopProduct {
	pub id: String,
	pub name: String,
	pub image_url: String,
	/// Sales amount attributed to the product.
	pub sales: Decimal,
}

/// A traffic source with its visit count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficSource {
	pub name: String,
	#[serde(rename = "value")]
	pub visits: u64,
}

/// New customers acquired in one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCohort {
	pub month: String,
	pub new_customers: u32,
}

/// An inclusive reporting date range.
///
/// The dashboard defaults to the trailing 30 days ending today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPeriod {
	pub from: NaiveDate,
	pub to: NaiveDate,
}

impl ReportPeriod {
	/// The trailing `days`-day period ending at `today`, inclusive on both
	/// ends. `trailing_days(today, 30)` spans today and the 29 days before
	/// it.
	pub fn trailing_days(today: NaiveDate, days: u32) -> Self {
		let from = today - Duration::days(i64::from(days.saturating_sub(1)));
		Self { from, to: today }
	}
}
