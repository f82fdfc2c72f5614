//! Query state, commands, and the derived page view for the orders list.
//!
//! The query state is owned by the dashboard session on behalf of the
//! presentation layer and is mutated only through discrete commands. The
//! derived view has no lifecycle of its own: it is recomputed on demand
//! and discarded.

use crate::order::{Order, StatusFilter};
use serde::{Deserialize, Serialize};

/// The (search, filter, page) tuple driving which orders are visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
	/// Free-text search, matched case-insensitively as a substring of the
	/// order id or customer name.
	pub search_term: String,
	/// Status restriction applied before the search filter.
	pub status_filter: StatusFilter,
	/// Current page, 1-based.
	pub current_page: u32,
}

impl Default for QueryState {
	fn default() -> Self {
		Self {
			search_term: String::new(),
			status_filter: StatusFilter::All,
			current_page: 1,
		}
	}
}

/// A derived page of the filtered orders list.
///
/// Recomputed on every query from the dataset and the current
/// [`QueryState`]; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPage {
	/// The visible slice of the filtered dataset, at most one page long.
	pub items: Vec<Order>,
	/// Total number of pages in the filtered set; 0 when it is empty.
	pub total_pages: u32,
}

impl OrderPage {
	/// An empty view: no items, zero pages.
	pub fn empty() -> Self {
		Self {
			items: Vec::new(),
			total_pages: 0,
		}
	}
}

/// Commands issued by the presentation layer in response to discrete user
/// actions.
///
/// These three drivers are the entire state-machine surface of the query
/// state: the two setters overwrite their field and reset the page, and
/// the page change is guarded against the current page count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum QueryCommand {
	/// Replace the search term and reset to the first page.
	SetSearchTerm(String),
	/// Replace the status filter and reset to the first page.
	SetStatusFilter(StatusFilter),
	/// Move to the requested page if it is within range.
	ChangePage(u32),
}

/// Outcome of a page-change request.
///
/// An out-of-range request is rejected and leaves the state unchanged.
/// Rejection is a no-op, not an error, and is never surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageChange {
	/// The request was in range; `current_page` now equals the value.
	Applied(u32),
	/// The request was out of range; the state is unchanged.
	Rejected,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_query_state_defaults() {
		let state = QueryState::default();
		assert_eq!(state.search_term, "");
		assert_eq!(state.status_filter, StatusFilter::All);
		assert_eq!(state.current_page, 1);
	}

	#[test]
	fn test_empty_page_has_zero_pages() {
		let page = OrderPage::empty();
		assert!(page.items.is_empty());
		assert_eq!(page.total_pages, 0);
	}

	#[test]
	fn test_page_serializes_with_camel_case_keys() {
		let json = serde_json::to_value(OrderPage::empty()).unwrap();
		assert!(json.get("totalPages").is_some());
		assert!(json.get("items").is_some());
	}
}
