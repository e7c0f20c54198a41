pub mod debounce;
pub mod session;
pub mod source;
pub mod store;

mod error;

pub use debounce::Debouncer;
pub use error::{Error, Result};
pub use session::{HouseCard, Session, Settings, View};
pub use source::{BoxFuture, HouseSource, HttpHouseSource};
pub use store::{LoadState, PendingLoad, RecordStore};
