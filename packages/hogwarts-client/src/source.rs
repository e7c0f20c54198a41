use std::{future::Future, pin::Pin, time::Duration as StdDuration};

use reqwest::Client;

use hogwarts_domain::House;

use crate::{Error, Result};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The external record-lookup collaborator.
pub trait HouseSource
where
	Self: Send + Sync,
{
	/// `name` asks the service to filter server-side; the browse session always passes `None`.
	fn fetch_houses<'a>(&'a self, name: Option<&'a str>) -> BoxFuture<'a, Result<Vec<House>>>;
}

pub struct HttpHouseSource {
	client: Client,
	api_base: String,
}
impl HttpHouseSource {
	pub fn new(cfg: &hogwarts_config::Client) -> Result<Self> {
		let api_base = cfg.api_base.trim().trim_end_matches('/');

		if api_base.is_empty() {
			return Err(Error::InvalidConfig { message: "client.api_base must be non-empty.".into() });
		}

		let client = Client::builder().timeout(StdDuration::from_millis(cfg.timeout_ms)).build()?;

		Ok(Self { client, api_base: api_base.to_string() })
	}

	pub fn houses_url(&self) -> String {
		format!("{}/houses", self.api_base)
	}

	pub async fn fetch(&self, name: Option<&str>) -> Result<Vec<House>> {
		let mut request = self.client.get(self.houses_url());

		if let Some(name) = name {
			request = request.query(&[("name", name)]);
		}

		let res = request.send().await?;
		let houses = res.error_for_status()?.json::<Vec<House>>().await?;

		tracing::debug!(count = houses.len(), filtered = name.is_some(), "Fetched houses.");

		Ok(houses)
	}
}
impl HouseSource for HttpHouseSource {
	fn fetch_houses<'a>(&'a self, name: Option<&'a str>) -> BoxFuture<'a, Result<Vec<House>>> {
		Box::pin(self.fetch(name))
	}
}
