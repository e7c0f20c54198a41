use std::{
	sync::{
		Arc,
		atomic::{AtomicU64, Ordering},
	},
	time::Duration,
};

use tokio::{
	sync::watch,
	task::JoinHandle,
	time::{self, Instant},
};

struct Shared<T> {
	tx: watch::Sender<T>,
	generation: AtomicU64,
	emissions: AtomicU64,
}

/// Turns a value that changes on every keystroke into one that only changes after it has been
/// stable for `delay`. Last write wins: every `set` cancels the emission scheduled by the
/// previous one.
///
/// Scheduling spawns onto the ambient tokio runtime.
pub struct Debouncer<T> {
	delay: Duration,
	shared: Arc<Shared<T>>,
	pending: Option<JoinHandle<()>>,
	torn_down: bool,
}
impl<T> Debouncer<T>
where
	T: Clone + Send + Sync + 'static,
{
	/// `initial` is the debounced value straight away, without waiting for `delay`.
	pub fn new(initial: T, delay: Duration) -> Self {
		let (tx, _) = watch::channel(initial);
		let shared =
			Shared { tx, generation: AtomicU64::new(0), emissions: AtomicU64::new(0) };

		Self { delay, shared: Arc::new(shared), pending: None, torn_down: false }
	}

	pub fn delay(&self) -> Duration {
		self.delay
	}

	pub fn set(&mut self, value: T) {
		if self.torn_down {
			tracing::debug!("Debouncer torn down; dropping input.");

			return;
		}

		self.cancel_pending();

		let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;
		let deadline = Instant::now() + self.delay;
		let shared = Arc::clone(&self.shared);

		self.pending = Some(tokio::spawn(async move {
			time::sleep_until(deadline).await;

			// A newer `set` or a teardown may have raced the abort.
			if shared.generation.load(Ordering::SeqCst) != generation {
				return;
			}

			shared.emissions.fetch_add(1, Ordering::SeqCst);
			shared.tx.send_replace(value);
		}));
	}

	/// The latest emitted value.
	pub fn current(&self) -> T {
		self.shared.tx.borrow().clone()
	}

	/// Notified once per emission.
	pub fn subscribe(&self) -> watch::Receiver<T> {
		self.shared.tx.subscribe()
	}

	/// Delayed emissions that actually fired. The initial value is not counted.
	pub fn emissions(&self) -> u64 {
		self.shared.emissions.load(Ordering::SeqCst)
	}

	pub fn is_pending(&self) -> bool {
		self.pending.as_ref().is_some_and(|handle| !handle.is_finished())
	}

	/// Cancels any pending emission; later `set` calls are ignored.
	pub fn teardown(&mut self) {
		self.torn_down = true;
		self.cancel_pending();
	}

	fn cancel_pending(&mut self) {
		self.shared.generation.fetch_add(1, Ordering::SeqCst);

		if let Some(handle) = self.pending.take() {
			handle.abort();
		}
	}
}
impl<T> Drop for Debouncer<T> {
	fn drop(&mut self) {
		self.shared.generation.fetch_add(1, Ordering::SeqCst);

		if let Some(handle) = self.pending.take() {
			handle.abort();
		}
	}
}
