//! Moving through the word space
//!
//! Single steps that stop at the ends of the space, and wraparound
//! neighborhoods generated on demand around a pivot index.

mod navigator;
mod window;

pub use navigator::{
    Direction, Neighbors, advance, backward, forward, lookahead, lookback, retreat, span,
};
pub use window::{Entry, Window};
