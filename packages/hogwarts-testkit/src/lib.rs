mod error;

pub use error::{Error, Result};

use std::{
	net::SocketAddr,
	sync::{
		Arc,
		atomic::{AtomicUsize, Ordering},
	},
};

use axum::Router;
use tokio::{net::TcpListener, task::JoinHandle};

use hogwarts_client::{BoxFuture, HouseSource};
use hogwarts_domain::{ColourRecognizer, House, Trait};

/// Colour tokens accepted by [`AllowList::css_basics`].
pub const BASIC_COLOURS: [&str; 9] =
	["scarlet", "gold", "yellow", "black", "blue", "green", "silver", "red", "white"];

/// Fake recognizer with a fixed allow-list.
#[derive(Clone, Debug, Default)]
pub struct AllowList {
	tokens: Vec<String>,
}
impl AllowList {
	pub fn new<I, S>(tokens: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self { tokens: tokens.into_iter().map(Into::into).collect() }
	}

	pub fn css_basics() -> Self {
		Self::new(BASIC_COLOURS)
	}
}
impl ColourRecognizer for AllowList {
	fn is_valid(&self, token: &str) -> bool {
		self.tokens.iter().any(|allowed| allowed == token)
	}
}

/// Serves a fixed list and counts how often it was asked.
#[derive(Clone, Debug, Default)]
pub struct StaticSource {
	houses: Vec<House>,
	calls: Arc<AtomicUsize>,
}
impl StaticSource {
	pub fn new(houses: Vec<House>) -> Self {
		Self { houses, calls: Arc::new(AtomicUsize::new(0)) }
	}

	pub fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}
impl HouseSource for StaticSource {
	fn fetch_houses<'a>(
		&'a self,
		_name: Option<&'a str>,
	) -> BoxFuture<'a, hogwarts_client::Result<Vec<House>>> {
		self.calls.fetch_add(1, Ordering::SeqCst);

		let houses = self.houses.clone();

		Box::pin(async move { Ok(houses) })
	}
}

/// Always fails the way an unreachable service does.
#[derive(Clone, Debug, Default)]
pub struct FailingSource;
impl HouseSource for FailingSource {
	fn fetch_houses<'a>(
		&'a self,
		_name: Option<&'a str>,
	) -> BoxFuture<'a, hogwarts_client::Result<Vec<House>>> {
		Box::pin(async {
			Err(hogwarts_client::Error::InvalidConfig {
				message: "Record lookup service is unreachable.".to_string(),
			})
		})
	}
}

/// An axum app bound to an ephemeral loopback port. Aborted on drop.
pub struct TestServer {
	addr: SocketAddr,
	handle: JoinHandle<()>,
}
impl TestServer {
	pub fn addr(&self) -> SocketAddr {
		self.addr
	}

	pub fn base_url(&self) -> String {
		format!("http://{}", self.addr)
	}
}
impl Drop for TestServer {
	fn drop(&mut self) {
		self.handle.abort();
	}
}

pub async fn serve(router: Router) -> Result<TestServer> {
	let listener = TcpListener::bind("127.0.0.1:0").await?;
	let addr = listener.local_addr()?;
	let handle = tokio::spawn(async move {
		if let Err(err) = axum::serve(listener, router).await {
			eprintln!("Test server stopped: {err}.");
		}
	});

	Ok(TestServer { addr, handle })
}

/// Raw (not normalized) catalogue in fetch order.
pub fn sample_houses() -> Vec<House> {
	vec![
		house(
			"1",
			"Gryffindor",
			"Scarlet and Gold",
			"Godric Gryffindor",
			"Lion",
			&["Courage", "Bravery", "Determination"],
		),
		house(
			"2",
			"Hufflepuff",
			"Yellow and Black",
			"Helga Hufflepuff",
			"Badger",
			&["Hard work", "Patience", "Loyalty"],
		),
		house(
			"3",
			"Ravenclaw",
			"Blue and Bronze",
			"Rowena Ravenclaw",
			"Eagle",
			&["Intelligence", "Wit", "Learning"],
		),
		house(
			"4",
			"Slytherin",
			"Green and Silver",
			"Salazar Slytherin",
			"Serpent",
			&["Ambition", "Cunning", "Resourcefulness"],
		),
	]
}

/// A single raw house with two traits, `brave` and `bold`.
pub fn gryffindor_only() -> Vec<House> {
	vec![House {
		id: "1".to_string(),
		name: "Gryffindor".to_string(),
		house_colours: "scarlet and gold".to_string(),
		founder: "Godric".to_string(),
		animal: "lion".to_string(),
		traits: vec![
			Trait { id: "t1".to_string(), name: "brave".to_string() },
			Trait { id: "t2".to_string(), name: "bold".to_string() },
		],
	}]
}

fn house(
	id: &str,
	name: &str,
	colours: &str,
	founder: &str,
	animal: &str,
	traits: &[&str],
) -> House {
	House {
		id: id.to_string(),
		name: name.to_string(),
		house_colours: colours.to_string(),
		founder: founder.to_string(),
		animal: animal.to_string(),
		traits: traits
			.iter()
			.enumerate()
			.map(|(index, name)| Trait { id: format!("{id}-{index}"), name: name.to_string() })
			.collect(),
	}
}
