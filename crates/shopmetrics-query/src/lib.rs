//! Orders list query engine for the ShopMetrics dashboard core.
//!
//! This module derives the visible page of the orders list from the
//! immutable dataset and the current query state. The derivation runs as
//! three explicit pure stages — status filter, search filter, pagination
//! — so ordering and boundary behavior stay independently testable. The
//! engine holds no state of its own; every call is a pure function of
//! its inputs and is safe to invoke repeatedly from any call site.

use shopmetrics_types::{Order, OrderPage, QueryState, StatusFilter};

/// Number of order records per page.
pub const PAGE_SIZE: usize = 8;

/// Applies the status filter, preserving dataset order.
///
/// An order is kept iff the filter matches its status by exact enum
/// equality; `All` keeps everything.
pub fn filter_by_status<'a>(orders: &'a [Order], filter: &StatusFilter) -> Vec<&'a Order> {
	orders
		.iter()
		.filter(|order| filter.matches(&order.status))
		.collect()
}

/// Applies the free-text search filter after the status stage.
///
/// An order is kept iff the term is empty, OR its id contains the term,
/// OR its customer name contains the term — case-insensitive substring
/// match, OR across the two fields.
pub fn filter_by_search<'a>(orders: &[&'a Order], term: &str) -> Vec<&'a Order> {
	if term.is_empty() {
		return orders.to_vec();
	}

	let needle = term.to_lowercase();
	orders
		.iter()
		.copied()
		.filter(|order| {
			order.id.to_lowercase().contains(&needle)
				|| order.customer_name.to_lowercase().contains(&needle)
		})
		.collect()
}

/// Total number of pages for a filtered set of the given length.
///
/// Ceiling division by [`PAGE_SIZE`]; an empty set has zero pages.
pub fn total_pages(filtered_len: usize) -> u32 {
	filtered_len.div_ceil(PAGE_SIZE) as u32
}

/// Slices one page out of the filtered set, preserving order.
///
/// An out-of-range page yields an empty item list, never an error:
/// page-change requests are pre-validated by [`is_valid_page`], and any
/// state that still points past the end simply renders as "no results".
pub fn paginate(filtered: &[&Order], current_page: u32) -> OrderPage {
	let total_pages = total_pages(filtered.len());

	let items = if current_page == 0 {
		Vec::new()
	} else {
		let start = (current_page as usize - 1).saturating_mul(PAGE_SIZE);
		filtered
			.iter()
			.skip(start)
			.take(PAGE_SIZE)
			.map(|order| (*order).clone())
			.collect()
	};

	OrderPage { items, total_pages }
}

/// Returns true when the requested page lies within `[1, total_pages]`.
///
/// This is the only explicit guard in the engine. With zero pages no
/// positive page number is valid, so every request is rejected and the
/// view stays on page 1 showing zero items.
pub fn is_valid_page(requested: u32, total_pages: u32) -> bool {
	requested >= 1 && requested <= total_pages
}

/// Derives the visible page and pagination metadata for the given
/// dataset and query state.
pub fn query(orders: &[Order], state: &QueryState) -> OrderPage {
	let by_status = filter_by_status(orders, &state.status_filter);
	let filtered = filter_by_search(&by_status, &state.search_term);
	paginate(&filtered, state.current_page)
}
