//! Substring search over the word space
//!
//! A deterministic scan of the neighborhood around the current position,
//! with a bounded random probe of the whole space as fallback.

pub mod controller;
pub mod random;
mod source;
pub mod state;
pub mod window;

pub use crate::navigation::Direction;
pub use controller::{SearchConfig, SearchController, SearchReport, literal_word};
pub use random::{DEFAULT_BUDGET, Probe, RandomSearch};
pub use source::{IndexSource, RngSource, uniform_below};
pub use state::{History, SearchState};
pub use window::{DEFAULT_LOOKAHEAD, DEFAULT_LOOKBACK, WindowSearch};
