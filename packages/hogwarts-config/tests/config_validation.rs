use std::{
	env, fs,
	path::PathBuf,
	sync::atomic::{AtomicU64, Ordering},
	time::{SystemTime, UNIX_EPOCH},
};

use toml::Value;

use hogwarts_config::{Config, Error};

const SAMPLE_CONFIG_TOML: &str = include_str!("fixtures/sample_config.toml");

fn sample_with(section: &str, key: &str, value: Value) -> String {
	let mut root: Value =
		toml::from_str(SAMPLE_CONFIG_TOML).expect("Failed to parse sample config.");
	let table = root
		.as_table_mut()
		.expect("Sample config must be a table.")
		.get_mut(section)
		.and_then(Value::as_table_mut)
		.unwrap_or_else(|| panic!("Sample config must include [{section}]."));

	table.insert(key.to_string(), value);

	toml::to_string(&root).expect("Failed to render sample config.")
}

fn write_temp_config(payload: &str) -> PathBuf {
	static COUNTER: AtomicU64 = AtomicU64::new(0);

	let nanos =
		SystemTime::now().duration_since(UNIX_EPOCH).expect("System clock is before epoch.").as_nanos();
	let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
	let path = env::temp_dir().join(format!("hogwarts_config_{nanos}_{seq}.toml"));

	fs::write(&path, payload).expect("Failed to write test config.");

	path
}

fn load_str(payload: &str) -> hogwarts_config::Result<Config> {
	let path = write_temp_config(payload);
	let result = hogwarts_config::load(&path);

	let _ = fs::remove_file(&path);

	result
}

fn validation_field(err: Error) -> &'static str {
	match err {
		Error::Validation { field, .. } => field,
		other => panic!("Expected validation error, got {other:?}."),
	}
}

#[test]
fn sample_config_loads() {
	let cfg = load_str(SAMPLE_CONFIG_TOML).expect("Sample config must load.");

	assert_eq!(cfg.service.http_bind, "127.0.0.1:4000");
	assert_eq!(cfg.client.timeout_ms, 5_000);
	assert_eq!(cfg.browse.page_size, 2);
	assert_eq!(cfg.browse.min_search_chars, 3);
	assert_eq!(cfg.browse.debounce_ms, 400);
}

#[test]
fn blank_data_path_is_normalized_to_none() {
	let cfg = load_str(SAMPLE_CONFIG_TOML).expect("Sample config must load.");

	assert!(cfg.catalogue.data_path.is_none());
}

#[test]
fn data_path_is_kept_when_set() {
	let payload = sample_with("catalogue", "data_path", Value::String("data/houses.json".into()));
	let cfg = load_str(&payload).expect("Config must load.");

	assert_eq!(cfg.catalogue.data_path, Some(PathBuf::from("data/houses.json")));
}

#[test]
fn zero_page_size_is_rejected() {
	let payload = sample_with("browse", "page_size", Value::Integer(0));
	let err = load_str(&payload).expect_err("Expected page_size validation error.");

	assert_eq!(validation_field(err), "browse.page_size");
}

#[test]
fn zero_debounce_is_rejected() {
	let payload = sample_with("browse", "debounce_ms", Value::Integer(0));
	let err = load_str(&payload).expect_err("Expected debounce validation error.");

	assert_eq!(validation_field(err), "browse.debounce_ms");
}

#[test]
fn zero_min_search_chars_is_allowed() {
	let payload = sample_with("browse", "min_search_chars", Value::Integer(0));
	let cfg = load_str(&payload).expect("A zero threshold filters on every keystroke.");

	assert_eq!(cfg.browse.min_search_chars, 0);
}

#[test]
fn api_base_requires_http_scheme() {
	let payload = sample_with("client", "api_base", Value::String("127.0.0.1:4000".into()));
	let err = load_str(&payload).expect_err("Expected api_base validation error.");

	assert_eq!(validation_field(err), "client.api_base");
}

#[test]
fn zero_timeout_is_rejected() {
	let payload = sample_with("client", "timeout_ms", Value::Integer(0));
	let err = load_str(&payload).expect_err("Expected timeout validation error.");

	assert_eq!(validation_field(err), "client.timeout_ms");
}

#[test]
fn blank_http_bind_is_rejected() {
	let payload = sample_with("service", "http_bind", Value::String("  ".into()));
	let err = load_str(&payload).expect_err("Expected http_bind validation error.");

	assert_eq!(validation_field(err), "service.http_bind");
}

#[test]
fn missing_file_reports_read_error() {
	let path = env::temp_dir().join("hogwarts_config_missing_does_not_exist.toml");
	let err = hogwarts_config::load(&path).expect_err("Expected read error.");

	assert!(matches!(err, Error::ReadConfig { .. }));
}

#[test]
fn malformed_toml_reports_parse_error_with_path() {
	let path = write_temp_config("[service\nhttp_bind = 1");
	let err = hogwarts_config::load(&path).expect_err("Expected parse error.");

	let _ = fs::remove_file(&path);

	match err {
		Error::ParseConfig { path: reported, .. } => assert_eq!(reported, path),
		other => panic!("Expected parse error, got {other:?}."),
	}
}
