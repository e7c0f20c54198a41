use std::collections::HashMap;

use crate::house::{House, Trait};

/// Per-house trait queries keyed by house id. Entries are never pruned; a missing key is an empty
/// query.
#[derive(Clone, Debug, Default)]
pub struct TraitFilters {
	queries: HashMap<String, String>,
}
impl TraitFilters {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn set(&mut self, house_id: impl Into<String>, query: impl Into<String>) {
		self.queries.insert(house_id.into(), query.into());
	}

	pub fn get(&self, house_id: &str) -> &str {
		self.queries.get(house_id).map(String::as_str).unwrap_or("")
	}

	pub fn len(&self) -> usize {
		self.queries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.queries.is_empty()
	}
}

/// A house that survived the name filter, paired with the traits that survived its own query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisibleHouse<'a> {
	pub house: &'a House,
	pub traits: Vec<&'a Trait>,
}

/// Case-insensitive substring test with no length gate.
pub fn name_matches(name: &str, query: &str) -> bool {
	name.to_lowercase().contains(query.to_lowercase().as_str())
}

/// Name filter for the search box. Queries shorter than `min_chars` characters pass everything.
pub fn passes_name_filter(name: &str, query: &str, min_chars: usize) -> bool {
	if query.chars().count() < min_chars {
		return true;
	}

	name_matches(name, query)
}

pub fn visible_traits<'a>(house: &'a House, query: &str) -> Vec<&'a Trait> {
	if query.is_empty() {
		return house.traits.iter().collect();
	}

	let needle = query.to_lowercase();

	house.traits.iter().filter(|t| t.name.to_lowercase().contains(needle.as_str())).collect()
}

/// Runs both filters. Fetch order is preserved; houses are only ever removed.
pub fn apply<'a>(
	houses: &'a [House],
	search: &str,
	trait_filters: &TraitFilters,
	min_chars: usize,
) -> Vec<VisibleHouse<'a>> {
	houses
		.iter()
		.filter(|house| passes_name_filter(&house.name, search, min_chars))
		.map(|house| VisibleHouse {
			house,
			traits: visible_traits(house, trait_filters.get(&house.id)),
		})
		.collect()
}
