use std::{
	future::Future,
	pin::Pin,
	sync::Arc,
	task::{Context, Poll},
};

use tokio::task::JoinHandle;

use hogwarts_domain::House;

use crate::{Result, source::HouseSource};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
	Loading,
	Ready,
}

/// The single outstanding fetch issued on mount. It cannot be cancelled; dropping it detaches the
/// request and its result is discarded.
pub struct PendingLoad {
	handle: JoinHandle<Result<Vec<House>>>,
}
impl Future for PendingLoad {
	type Output = Result<Vec<House>>;

	fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
		Pin::new(&mut self.handle).poll(cx).map(|joined| joined.unwrap_or_else(|err| Err(err.into())))
	}
}

/// Fetched, normalized houses. Populated once per session and never refreshed.
#[derive(Debug)]
pub struct RecordStore {
	state: LoadState,
	houses: Vec<House>,
}
impl RecordStore {
	pub fn new() -> Self {
		Self { state: LoadState::Loading, houses: Vec::new() }
	}

	/// Creates a loading store and issues the one unfiltered fetch. Must run inside a tokio runtime.
	pub fn mount(source: Arc<dyn HouseSource>) -> (Self, PendingLoad) {
		let handle = tokio::spawn(async move { source.fetch_houses(None).await });

		(Self::new(), PendingLoad { handle })
	}

	pub fn state(&self) -> LoadState {
		self.state
	}

	pub fn is_loading(&self) -> bool {
		self.state == LoadState::Loading
	}

	pub fn houses(&self) -> &[House] {
		&self.houses
	}

	/// Applies the fetch outcome. A failure is logged and leaves the store ready and empty. Returns
	/// `false` when the store was already populated.
	pub fn finish(&mut self, outcome: Result<Vec<House>>) -> bool {
		if self.state == LoadState::Ready {
			tracing::debug!("Record store already populated; ignoring load result.");

			return false;
		}

		match outcome {
			Ok(houses) => {
				self.houses = houses.into_iter().map(House::normalized).collect();

				tracing::info!(count = self.houses.len(), "Houses loaded.");
			},
			Err(err) => {
				self.houses.clear();

				tracing::error!(error = %err, "Failed to fetch houses.");
			},
		}

		self.state = LoadState::Ready;

		true
	}
}
impl Default for RecordStore {
	fn default() -> Self {
		Self::new()
	}
}
