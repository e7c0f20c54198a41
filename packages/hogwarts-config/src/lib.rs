mod error;
mod types;

pub use error::{Error, Result};
pub use types::{
	Browse, Catalogue, Client, Config, DEFAULT_DEBOUNCE_MS, DEFAULT_MIN_SEARCH_CHARS,
	DEFAULT_PAGE_SIZE, Service,
};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg = parse(&raw).map_err(|err| match err {
		Error::ParseConfig { source, .. } => Error::ParseConfig { path: path.to_path_buf(), source },
		other => other,
	})?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

/// Parses TOML text without normalizing or validating it.
pub fn parse(raw: &str) -> Result<Config> {
	toml::from_str(raw).map_err(|err| Error::ParseConfig { path: Default::default(), source: err })
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::invalid("service.http_bind", "must be non-empty."));
	}

	let api_base = cfg.client.api_base.trim();

	if api_base.is_empty() {
		return Err(Error::invalid("client.api_base", "must be non-empty."));
	}
	if !api_base.starts_with("http://") && !api_base.starts_with("https://") {
		return Err(Error::invalid("client.api_base", "must start with http:// or https://."));
	}
	if cfg.client.timeout_ms == 0 {
		return Err(Error::invalid("client.timeout_ms", "must be greater than zero."));
	}
	if cfg.browse.page_size == 0 {
		return Err(Error::invalid("browse.page_size", "must be greater than zero."));
	}
	if cfg.browse.debounce_ms == 0 {
		return Err(Error::invalid("browse.debounce_ms", "must be greater than zero."));
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	if cfg
		.catalogue
		.data_path
		.as_deref()
		.map(|path| path.as_os_str().to_string_lossy().trim().is_empty())
		.unwrap_or(false)
	{
		cfg.catalogue.data_path = None;
	}

	let trimmed = cfg.client.api_base.trim().trim_end_matches('/');

	if trimmed.len() != cfg.client.api_base.len() {
		cfg.client.api_base = trimmed.to_string();
	}
}
