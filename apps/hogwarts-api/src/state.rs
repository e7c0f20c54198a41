use std::{fs, sync::Arc};

use color_eyre::eyre::WrapErr;

use hogwarts_domain::House;

/// Catalogue compiled into the binary, used when `catalogue.data_path` is unset.
pub const EMBEDDED_CATALOGUE: &str = include_str!("../data/houses.json");

#[derive(Clone)]
pub struct AppState {
	/// Raw houses in catalogue order. Colour strings are served as stored; clients normalize.
	pub catalogue: Arc<Vec<House>>,
}
impl AppState {
	pub fn new(houses: Vec<House>) -> Self {
		Self { catalogue: Arc::new(houses) }
	}

	pub fn embedded() -> color_eyre::Result<Self> {
		let houses = serde_json::from_str(EMBEDDED_CATALOGUE)
			.wrap_err("Embedded house catalogue is not valid JSON.")?;

		Ok(Self::new(houses))
	}

	pub fn from_config(config: &hogwarts_config::Config) -> color_eyre::Result<Self> {
		let Some(path) = config.catalogue.data_path.as_ref() else {
			return Self::embedded();
		};
		let raw = fs::read_to_string(path)
			.wrap_err_with(|| format!("Failed to read house catalogue at {path:?}."))?;
		let houses = serde_json::from_str(&raw)
			.wrap_err_with(|| format!("Failed to parse house catalogue at {path:?}."))?;

		Ok(Self::new(houses))
	}
}
