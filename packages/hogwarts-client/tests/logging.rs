use std::{
	io::{self, Write},
	sync::{Arc, Mutex},
};

use tracing::Level;

use hogwarts_client::{Session, Settings};
use hogwarts_testkit::AllowList;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);
impl Capture {
	fn contents(&self) -> String {
		let buf = self.0.lock().expect("Capture lock poisoned.");

		String::from_utf8_lossy(&buf).into_owned()
	}
}
impl Write for Capture {
	fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
		self.0.lock().expect("Capture lock poisoned.").extend_from_slice(bytes);

		Ok(bytes.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

fn captured<F>(f: F) -> String
where
	F: FnOnce(),
{
	let capture = Capture::default();
	let writer = capture.clone();
	let subscriber = tracing_subscriber::fmt()
		.with_max_level(Level::DEBUG)
		.with_ansi(false)
		.with_writer(move || writer.clone())
		.finish();

	tracing::subscriber::with_default(subscriber, f);

	capture.contents()
}

#[test]
fn trait_input_is_logged_with_house_id() {
	let mut session = Session::new(Settings::default(), AllowList::css_basics());
	let logs = captured(|| session.on_trait_input("2", "pat"));

	assert!(logs.contains("Trait filter updated."));
	assert!(logs.contains("house_id=2"));
	assert!(logs.contains("query=pat"));
}

#[test]
fn trait_input_after_teardown_is_silent() {
	let mut session = Session::new(Settings::default(), AllowList::css_basics());

	session.teardown();

	let logs = captured(|| session.on_trait_input("2", "pat"));

	assert!(!logs.contains("Trait filter updated."));
}
