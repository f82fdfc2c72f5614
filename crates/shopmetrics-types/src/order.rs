//! Order record types for the ShopMetrics dashboard core.
//!
//! This module defines the immutable order record, its fulfilment status,
//! and the status filter applied by the orders list query engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable order record.
///
/// Orders are created once at startup from the seeded dataset and never
/// mutated or destroyed during the process lifetime. The `id` is unique
/// across the dataset and doubles as the stable sort key: the dataset
/// order is insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
	/// Unique identifier for this order.
	pub id: String,
	/// Customer display name.
	pub customer_name: String,
	/// Customer contact email.
	pub customer_email: String,
	/// Calendar date string (ISO-like). Kept opaque: never parsed or
	/// validated by the core.
	pub date: String,
	/// Current fulfilment status.
	pub status: OrderStatus,
	/// Order total as a decimal currency amount.
	pub total: Decimal,
}

/// Fulfilment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
	/// Order has been fulfilled and delivered.
	Fulfilled,
	/// Order is awaiting fulfilment.
	Pending,
	/// Order has been cancelled.
	Cancelled,
}

impl fmt::Display for OrderStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			OrderStatus::Fulfilled => write!(f, "Fulfilled"),
			OrderStatus::Pending => write!(f, "Pending"),
			OrderStatus::Cancelled => write!(f, "Cancelled"),
		}
	}
}

/// Status filter selection for the orders list.
///
/// `All` matches every order; the remaining variants match by exact enum
/// equality. There is no fuzzy matching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusFilter {
	/// No status restriction.
	#[default]
	All,
	/// Only fulfilled orders.
	Fulfilled,
	/// Only pending orders.
	Pending,
	/// Only cancelled orders.
	Cancelled,
}

impl StatusFilter {
	/// Returns true when the given status passes this filter.
	pub fn matches(&self, status: &OrderStatus) -> bool {
		match self {
			StatusFilter::All => true,
			StatusFilter::Fulfilled => *status == OrderStatus::Fulfilled,
			StatusFilter::Pending => *status == OrderStatus::Pending,
			StatusFilter::Cancelled => *status == OrderStatus::Cancelled,
		}
	}
}

impl From<OrderStatus> for StatusFilter {
	fn from(status: OrderStatus) -> Self {
		match status {
			OrderStatus::Fulfilled => StatusFilter::Fulfilled,
			OrderStatus::Pending => StatusFilter::Pending,
			OrderStatus::Cancelled => StatusFilter::Cancelled,
		}
	}
}

impl fmt::Display for StatusFilter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			StatusFilter::All => write!(f, "All"),
			StatusFilter::Fulfilled => write!(f, "Fulfilled"),
			StatusFilter::Pending => write!(f, "Pending"),
			StatusFilter::Cancelled => write!(f, "Cancelled"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn order(status: OrderStatus) -> Order {
		Order {
			id: "ORD001".to_string(),
			customer_name: "Liam Johnson".to_string(),
			customer_email: "liam@example.com".to_string(),
			date: "2023-07-15".to_string(),
			status,
			total: Decimal::new(25000, 2),
		}
	}

	#[test]
	fn test_all_filter_matches_every_status() {
		for status in [
			OrderStatus::Fulfilled,
			OrderStatus::Pending,
			OrderStatus::Cancelled,
		] {
			assert!(StatusFilter::All.matches(&status));
		}
	}

	#[test]
	fn test_specific_filter_matches_by_equality() {
		assert!(StatusFilter::Fulfilled.matches(&OrderStatus::Fulfilled));
		assert!(!StatusFilter::Fulfilled.matches(&OrderStatus::Pending));
		assert!(!StatusFilter::Cancelled.matches(&OrderStatus::Fulfilled));
		assert!(StatusFilter::Cancelled.matches(&OrderStatus::Cancelled));
	}

	#[test]
	fn test_filter_default_is_all() {
		assert_eq!(StatusFilter::default(), StatusFilter::All);
	}

	#[test]
	fn test_order_serializes_with_camel_case_keys() {
		let json = serde_json::to_value(order(OrderStatus::Fulfilled)).unwrap();
		assert_eq!(json["customerName"], "Liam Johnson");
		assert_eq!(json["customerEmail"], "liam@example.com");
		assert_eq!(json["status"], "Fulfilled");
	}

	#[test]
	fn test_status_display_matches_serde_representation() {
		for status in [
			OrderStatus::Fulfilled,
			OrderStatus::Pending,
			OrderStatus::Cancelled,
		] {
			let json = serde_json::to_value(status).unwrap();
			assert_eq!(json.as_str().unwrap(), status.to_string());
		}
	}
}
