use std::{sync::Arc, time::Duration};

use tokio::sync::watch;

use hogwarts_domain::{
	ColourRecognizer, Gradient, House, PageInfo, PageState, TraitFilters, VisibleHouse, colour,
	filter, pagination,
};

use crate::{
	Result,
	debounce::Debouncer,
	source::HouseSource,
	store::{PendingLoad, RecordStore},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
	pub page_size: usize,
	pub min_search_chars: usize,
	pub debounce: Duration,
}
impl From<&hogwarts_config::Browse> for Settings {
	fn from(cfg: &hogwarts_config::Browse) -> Self {
		Self {
			page_size: cfg.page_size,
			min_search_chars: cfg.min_search_chars,
			debounce: Duration::from_millis(cfg.debounce_ms),
		}
	}
}
impl Default for Settings {
	fn default() -> Self {
		Self::from(&hogwarts_config::Browse::default())
	}
}

/// One house as the renderer sees it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HouseCard {
	pub id: String,
	pub name: String,
	pub animal: String,
	pub founder: String,
	pub gradient: Gradient,
	pub trait_query: String,
	pub traits: Vec<String>,
}

/// Everything that crosses the rendering boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct View {
	pub loading: bool,
	/// Raw search box contents, not the debounced value.
	pub search: String,
	pub cards: Vec<HouseCard>,
	/// Houses passing the name filter across all pages.
	pub visible_count: usize,
	/// `None` while loading and when nothing is visible.
	pub pagination: Option<PageInfo>,
}

/// Owns the browse state cells: record store, debounced search, trait-filter map and page state.
/// The pipeline functions it calls stay pure.
pub struct Session<R> {
	settings: Settings,
	recognizer: R,
	store: RecordStore,
	search_raw: String,
	search: Debouncer<String>,
	applied_search: String,
	trait_filters: TraitFilters,
	pages: PageState,
	torn_down: bool,
}
impl<R> Session<R>
where
	R: ColourRecognizer,
{
	/// A session whose store is loading but which has issued no fetch; feed it with
	/// [`Session::finish_load`].
	pub fn new(settings: Settings, recognizer: R) -> Self {
		Self {
			settings,
			recognizer,
			store: RecordStore::new(),
			search_raw: String::new(),
			search: Debouncer::new(String::new(), settings.debounce),
			applied_search: String::new(),
			trait_filters: TraitFilters::new(),
			pages: PageState::new(settings.page_size),
			torn_down: false,
		}
	}

	/// Creates the session and issues its one fetch. The caller awaits the returned load and hands
	/// the outcome back through [`Session::finish_load`].
	pub fn mount(
		settings: Settings,
		recognizer: R,
		source: Arc<dyn HouseSource>,
	) -> (Self, PendingLoad) {
		let (store, pending) = RecordStore::mount(source);
		let mut session = Self::new(settings, recognizer);

		session.store = store;

		(session, pending)
	}

	pub fn settings(&self) -> &Settings {
		&self.settings
	}

	pub fn is_loading(&self) -> bool {
		self.store.is_loading()
	}

	pub fn is_torn_down(&self) -> bool {
		self.torn_down
	}

	pub fn houses(&self) -> &[House] {
		self.store.houses()
	}

	pub fn finish_load(&mut self, outcome: Result<Vec<House>>) -> bool {
		if self.torn_down {
			tracing::debug!("Session torn down; discarding load result.");

			return false;
		}

		self.store.finish(outcome)
	}

	pub fn on_search_input(&mut self, raw: impl Into<String>) {
		if self.torn_down {
			return;
		}

		let raw = raw.into();

		self.search_raw.clone_from(&raw);
		self.search.set(raw);
	}

	pub fn on_trait_input(&mut self, house_id: impl Into<String>, raw: impl Into<String>) {
		if self.torn_down {
			return;
		}

		let (house_id, raw) = (house_id.into(), raw.into());

		tracing::debug!(%house_id, query = %raw, "Trait filter updated.");

		self.trait_filters.set(house_id, raw);
	}

	/// Fires whenever the debounced search value settles.
	pub fn search_updates(&self) -> watch::Receiver<String> {
		self.search.subscribe()
	}

	pub fn raw_search(&self) -> &str {
		&self.search_raw
	}

	pub fn debounced_search(&self) -> String {
		self.search.current()
	}

	pub fn current_page(&self) -> usize {
		self.pages.current_page()
	}

	/// Adopts the latest debounced search. A changed value sends pagination back to page 1.
	pub fn sync_search(&mut self) -> bool {
		let debounced = self.search.current();

		if debounced == self.applied_search {
			return false;
		}

		tracing::debug!(search = %debounced, "Search settled; returning to the first page.");

		self.applied_search = debounced;
		self.pages.reset();

		true
	}

	pub fn next_page(&mut self) -> bool {
		self.sync_search();

		let total = self.total_pages();

		self.pages.clamp(total);
		self.pages.next(total)
	}

	pub fn prev_page(&mut self) -> bool {
		self.sync_search();

		let total = self.total_pages();

		self.pages.clamp(total);
		self.pages.prev()
	}

	pub fn view(&mut self) -> View {
		self.sync_search();

		if self.store.is_loading() {
			return View {
				loading: true,
				search: self.search_raw.clone(),
				cards: Vec::new(),
				visible_count: 0,
				pagination: None,
			};
		}

		let visible = filter::apply(
			self.store.houses(),
			&self.applied_search,
			&self.trait_filters,
			self.settings.min_search_chars,
		);
		let total = pagination::page_count(visible.len(), self.pages.page_size());

		self.pages.clamp(total);

		let cards = self
			.pages
			.window(&visible)
			.iter()
			.map(|v| card(v, &self.trait_filters, &self.recognizer))
			.collect();

		View {
			loading: false,
			search: self.search_raw.clone(),
			cards,
			visible_count: visible.len(),
			pagination: PageInfo::new(self.pages.current_page(), total),
		}
	}

	/// Cancels the pending search emission and freezes the session.
	pub fn teardown(&mut self) {
		self.torn_down = true;
		self.search.teardown();
	}

	fn total_pages(&self) -> usize {
		let visible = filter::apply(
			self.store.houses(),
			&self.applied_search,
			&self.trait_filters,
			self.settings.min_search_chars,
		);

		pagination::page_count(visible.len(), self.pages.page_size())
	}
}

fn card<R>(visible: &VisibleHouse<'_>, trait_filters: &TraitFilters, recognizer: &R) -> HouseCard
where
	R: ColourRecognizer,
{
	let house = visible.house;

	HouseCard {
		id: house.id.clone(),
		name: house.name.clone(),
		animal: house.animal.clone(),
		founder: house.founder.clone(),
		gradient: colour::gradient(&house.house_colours, recognizer),
		trait_query: trait_filters.get(&house.id).to_string(),
		traits: visible.traits.iter().map(|t| t.name.clone()).collect(),
	}
}
