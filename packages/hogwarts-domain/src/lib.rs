//! Pure presentation pipeline for the house catalogue: normalization, filtering, colour gating
//! and page windows. Nothing in here reads ambient state or performs I/O.

pub mod colour;
pub mod filter;
pub mod house;
pub mod pagination;

pub use colour::{ColourRecognizer, FALLBACK_STOPS, Gradient};
pub use filter::{TraitFilters, VisibleHouse};
pub use house::{House, Trait};
pub use pagination::{PageInfo, PageState};
