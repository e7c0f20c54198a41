use std::path::PathBuf;

use serde::Deserialize;

pub const DEFAULT_PAGE_SIZE: usize = 2;
pub const DEFAULT_MIN_SEARCH_CHARS: usize = 3;
pub const DEFAULT_DEBOUNCE_MS: u64 = 400;

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	#[serde(default)]
	pub catalogue: Catalogue,
	pub client: Client,
	#[serde(default)]
	pub browse: Browse,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Catalogue {
	/// Optional. JSON array of houses served instead of the catalogue embedded in the API binary.
	pub data_path: Option<PathBuf>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Client {
	/// Base URL of the record-lookup service, without a trailing slash.
	pub api_base: String,
	pub timeout_ms: u64,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Browse {
	pub page_size: usize,
	/// Search text shorter than this (in chars) does not filter by name.
	pub min_search_chars: usize,
	/// Quiet period before a search edit reaches the filter.
	pub debounce_ms: u64,
}
impl Default for Browse {
	fn default() -> Self {
		Self {
			page_size: DEFAULT_PAGE_SIZE,
			min_search_chars: DEFAULT_MIN_SEARCH_CHARS,
			debounce_ms: DEFAULT_DEBOUNCE_MS,
		}
	}
}
