//! Compiled-in seed datasets for the ShopMetrics dashboard core.
//!
//! These are the datasets of record: the twelve-order list behind the
//! orders page plus the dashboard and analytics series. They are built
//! once at first access and never mutated.

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use shopmetrics_types::{
	CustomerCohort, KpiBaseline, Order, OrderStatus, SalesPoint, TopProduct, TrafficSource,
};

fn order(
	id: &str,
	customer_name: &str,
	customer_email: &str,
	date: &str,
	status: OrderStatus,
	total_cents: i64,
) -> Order {
	Order {
		id: id.to_string(),
		customer_name: customer_name.to_string(),
		customer_email: customer_email.to_string(),
		date: date.to_string(),
		status,
		total: Decimal::new(total_cents, 2),
	}
}

/// The order dataset of record, in insertion order.
pub static ORDERS: Lazy<Vec<Order>> = Lazy::new(|| {
	use OrderStatus::{Cancelled, Fulfilled, Pending};
	vec![
		order("ORD001", "Liam Johnson", "liam@example.com", "2023-07-15", Fulfilled, 25000),
		order("ORD002", "Olivia Smith", "olivia@example.com", "2023-07-16", Fulfilled, 15075),
		order("ORD003", "Noah Williams", "noah@example.com", "2023-07-17", Pending, 35000),
		order("ORD004", "Emma Brown", "emma@example.com", "2023-07-18", Fulfilled, 45050),
		order("ORD005", "Ava Jones", "ava@example.com", "2023-07-19", Cancelled, 7500),
		order("ORD006", "James Garcia", "james@example.com", "2023-07-20", Fulfilled, 20000),
		order("ORD007", "Sophia Miller", "sophia@example.com", "2023-07-21", Pending, 12025),
		order("ORD008", "Isabella Davis", "isabella@example.com", "2023-07-22", Fulfilled, 8000),
		order("ORD009", "Mia Rodriguez", "mia@example.com", "2023-07-23", Cancelled, 30000),
		order("ORD010", "Elijah Martinez", "elijah@example.com", "2023-07-24", Fulfilled, 50000),
		order("ORD011", "Charlotte Hernandez", "charlotte@example.com", "2023-07-25", Pending, 9550),
		order("ORD012", "William Lopez", "william@example.com", "2023-07-26", Fulfilled, 18000),
	]
});

/// Monthly sales trend series for the dashboard chart.
pub static SALES_TREND: Lazy<Vec<SalesPoint>> = Lazy::new(|| {
	[
		("Jan", 1860),
		("Feb", 3050),
		("Mar", 2370),
		("Apr", 730),
		("May", 2090),
		("Jun", 2140),
	]
	.into_iter()
	.map(|(time, sales)| SalesPoint {
		time: time.to_string(),
		sales: Decimal::new(sales, 0),
	})
	.collect()
});

/// Top-selling products for the analytics page.
pub static TOP_PRODUCTS: Lazy<Vec<TopProduct>> = Lazy::new(|| {
	[
		("prod_001", "Classic Leather Wallet", "Wallet", 1_503_285),
		("prod_002", "Minimalist Wrist Watch", "Watch", 1_245_050),
		("prod_003", "Canvas Messenger Bag", "Bag", 987_500),
		("prod_004", "Modern Sunglasses", "Glasses", 765_420),
		("prod_005", "Stainless Steel Tumbler", "Tumbler", 512_099),
	]
	.into_iter()
	.map(|(id, name, label, sales_cents)| TopProduct {
		id: id.to_string(),
		name: name.to_string(),
		image_url: format!("https://placehold.co/100x100?text={}", label),
		sales: Decimal::new(sales_cents, 2),
	})
	.collect()
});

/// Traffic source breakdown for the analytics pie chart.
pub static TRAFFIC_SOURCES: Lazy<Vec<TrafficSource>> = Lazy::new(|| {
	[
		("Direct", 400),
		("Google", 300),
		("Social Media", 300),
		("Referral", 200),
	]
	.into_iter()
	.map(|(name, visits)| TrafficSource {
		name: name.to_string(),
		visits,
	})
	.collect()
});

/// Monthly new-customer counts for the acquisition chart.
pub static CUSTOMER_COHORTS: Lazy<Vec<CustomerCohort>> = Lazy::new(|| {
	[
		("Jan", 65),
		("Feb", 59),
		("Mar", 80),
		("Apr", 81),
		("May", 56),
		("Jun", 55),
	]
	.into_iter()
	.map(|(month, new_customers)| CustomerCohort {
		month: month.to_string(),
		new_customers,
	})
	.collect()
});

/// Prior-period aggregates the KPI change percentages are computed
/// against.
pub static KPI_BASELINE: Lazy<KpiBaseline> = Lazy::new(|| KpiBaseline {
	total_revenue: Decimal::new(197_915, 2),
	order_count: 10,
	average_order_value: Decimal::new(24_059, 2),
});
