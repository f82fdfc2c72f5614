//! Dashboard session core for ShopMetrics.
//!
//! The session owns the orders-list query state and applies the three
//! drivers that make up its entire state-machine surface: replacing the
//! search term, replacing the status filter, and changing the page. Each
//! command mutates the state; the caller then re-derives the page view
//! and forwards it to the rendering boundary. This explicit message
//! passing replaces the source framework's implicit
//! re-render-on-state-change model.

pub mod builder;

pub use builder::{default_store_factories, BuilderError, SessionBuilder};

use shopmetrics_query::{is_valid_page, query};
use shopmetrics_report::ReportService;
use shopmetrics_types::{Order, OrderPage, PageChange, QueryCommand, QueryState, StatusFilter};

/// Coordinates the orders list and the report widgets.
///
/// Owns the [`QueryState`] on behalf of the presentation layer and the
/// order dataset loaded at startup. The dataset never changes during the
/// session lifetime, so every view derivation is a pure function of the
/// current state.
pub struct DashboardSession {
	/// Dashboard and analytics read models.
	reports: ReportService,
	/// The order dataset, loaded once at startup.
	orders: Vec<Order>,
	/// Current orders-list query state.
	state: QueryState,
}

impl DashboardSession {
	pub(crate) fn new(reports: ReportService, orders: Vec<Order>) -> Self {
		Self {
			reports,
			orders,
			state: QueryState::default(),
		}
	}

	/// Derives the visible page and pagination metadata for the current
	/// query state.
	pub fn orders_view(&self) -> OrderPage {
		query(&self.orders, &self.state)
	}

	/// Replaces the search term and resets to the first page.
	pub fn set_search_term(&mut self, term: impl Into<String>) {
		self.state.search_term = term.into();
		self.state.current_page = 1;
		tracing::debug!(term = %self.state.search_term, "Search term changed");
	}

	/// Replaces the status filter and resets to the first page.
	pub fn set_status_filter(&mut self, filter: StatusFilter) {
		self.state.status_filter = filter;
		self.state.current_page = 1;
		tracing::debug!(filter = %filter, "Status filter changed");
	}

	/// Moves to the requested page if it is within range.
	///
	/// An out-of-range request is rejected and leaves the state
	/// unchanged. Rejection is a no-op, not an error, and never touches
	/// the search term or the status filter.
	pub fn change_page(&mut self, requested: u32) -> PageChange {
		let total_pages = self.orders_view().total_pages;
		if is_valid_page(requested, total_pages) {
			self.state.current_page = requested;
			PageChange::Applied(requested)
		} else {
			tracing::debug!(requested, total_pages, "Rejected out-of-range page request");
			PageChange::Rejected
		}
	}

	/// Applies a command issued by the presentation layer.
	pub fn apply(&mut self, command: QueryCommand) {
		match command {
			QueryCommand::SetSearchTerm(term) => self.set_search_term(term),
			QueryCommand::SetStatusFilter(filter) => self.set_status_filter(filter),
			QueryCommand::ChangePage(page) => {
				self.change_page(page);
			}
		}
	}

	/// The current query state.
	pub fn state(&self) -> &QueryState {
		&self.state
	}

	/// Dashboard and analytics read models.
	pub fn reports(&self) -> &ReportService {
		&self.reports
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use shopmetrics_config::Config;
	use shopmetrics_store::seed;

	fn init_tracing() {
		let _ = tracing_subscriber::fmt().with_test_writer().try_init();
	}

	fn memory_config() -> Config {
		"[store]\nprimary = \"memory\"\n\n[store.implementations.memory]\n"
			.parse()
			.unwrap()
	}

	fn session() -> DashboardSession {
		init_tracing();
		SessionBuilder::new(memory_config()).build_default().unwrap()
	}

	fn ids(page: &OrderPage) -> Vec<&str> {
		page.items.iter().map(|o| o.id.as_str()).collect()
	}

	#[test]
	fn test_initial_view_shows_first_page() {
		let session = session();
		let page = session.orders_view();
		assert_eq!(page.items.len(), 8);
		assert_eq!(page.total_pages, 2);
		assert_eq!(page.items[0].id, "ORD001");
		assert_eq!(page.items[7].id, "ORD008");
	}

	#[test]
	fn test_change_page_within_range_is_applied() {
		let mut session = session();
		assert_eq!(session.change_page(2), PageChange::Applied(2));
		assert_eq!(session.state().current_page, 2);
		assert_eq!(
			ids(&session.orders_view()),
			vec!["ORD009", "ORD010", "ORD011", "ORD012"]
		);
	}

	#[test]
	fn test_change_page_rejects_zero_and_beyond_range() {
		let mut session = session();
		assert_eq!(session.change_page(0), PageChange::Rejected);
		assert_eq!(session.change_page(3), PageChange::Rejected);
		assert_eq!(session.state().current_page, 1);
	}

	#[test]
	fn test_out_of_range_request_leaves_view_unchanged() {
		let mut session = session();
		session.set_status_filter(StatusFilter::Pending);
		let before = session.orders_view();
		assert_eq!(before.total_pages, 1);

		assert_eq!(session.change_page(5), PageChange::Rejected);
		assert_eq!(session.state().current_page, 1);
		assert_eq!(session.orders_view(), before);
	}

	#[test]
	fn test_search_resets_current_page() {
		let mut session = session();
		session.change_page(2);
		session.set_search_term("liam");
		assert_eq!(session.state().current_page, 1);
		assert_eq!(ids(&session.orders_view()), vec!["ORD001"]);
	}

	#[test]
	fn test_filter_resets_current_page() {
		let mut session = session();
		session.change_page(2);
		session.set_status_filter(StatusFilter::Fulfilled);
		assert_eq!(session.state().current_page, 1);
		assert_eq!(session.orders_view().items.len(), 7);
	}

	#[test]
	fn test_no_page_is_reachable_with_empty_results() {
		let mut session = session();
		session.set_search_term("no such order");
		assert_eq!(session.orders_view().total_pages, 0);
		assert_eq!(session.change_page(1), PageChange::Rejected);
		assert_eq!(session.state().current_page, 1);
		assert!(session.orders_view().items.is_empty());
	}

	#[test]
	fn test_id_search_composes_with_status_filter() {
		let mut session = session();
		session.set_status_filter(StatusFilter::Cancelled);
		session.set_search_term("ORD009");
		assert_eq!(ids(&session.orders_view()), vec!["ORD009"]);
	}

	#[test]
	fn test_commands_drive_the_same_transitions() {
		let mut session = session();
		session.apply(QueryCommand::SetStatusFilter(StatusFilter::Fulfilled));
		session.apply(QueryCommand::SetSearchTerm("o".to_string()));
		session.apply(QueryCommand::ChangePage(9));

		assert_eq!(session.state().status_filter, StatusFilter::Fulfilled);
		assert_eq!(session.state().search_term, "o");
		// The page request was out of range and ignored.
		assert_eq!(session.state().current_page, 1);
	}

	#[test]
	fn test_reports_are_wired_through_the_session() {
		let session = session();
		let summary = session.reports().kpi_summary().unwrap();
		assert_eq!(summary.order_count, 12);
	}

	#[test]
	fn test_builder_rejects_unknown_backend() {
		init_tracing();
		let config: Config =
			"[store]\nprimary = \"redis\"\n\n[store.implementations.redis]\n"
				.parse()
				.unwrap();
		let result = SessionBuilder::new(config).build_default();
		assert!(matches!(result, Err(BuilderError::Config(_))));
	}

	#[test]
	fn test_builder_loads_orders_from_fixture_files() {
		init_tracing();
		let dir = tempfile::tempdir().unwrap();
		let payload = serde_json::to_vec(&*seed::ORDERS).unwrap();
		std::fs::write(dir.path().join("orders.json"), payload).unwrap();

		let config: Config = format!(
			"[store]\nprimary = \"fixture\"\n\n[store.implementations.fixture]\npath = {:?}\n",
			dir.path()
		)
		.parse()
		.unwrap();

		let session = SessionBuilder::new(config).build_default().unwrap();
		assert_eq!(session.orders_view().items.len(), 8);

		// Only the orders fixture exists, so report datasets are absent.
		assert!(session.reports().sales_trend().is_err());
	}
}
