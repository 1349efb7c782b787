//! Deterministic substring search around the current position
//!
//! Scans what the caller is displaying, then a small neighborhood generated
//! on demand. Bounded by the window sizes; the first match in scan order wins.

use crate::core::Index;
use crate::navigation::{Direction, Entry, Window, backward, forward};

/// Entries scanned behind the pivot for a `Lower` search
pub const DEFAULT_LOOKBACK: usize = 50;

/// Entries scanned ahead of the pivot once the displayed rows are exhausted
pub const DEFAULT_LOOKAHEAD: usize = 25;

/// Bounded neighborhood search
#[derive(Debug, Clone, Copy)]
pub struct WindowSearch {
    lookback: usize,
    lookahead: usize,
}

impl WindowSearch {
    #[must_use]
    pub const fn new(lookback: usize, lookahead: usize) -> Self {
        Self {
            lookback,
            lookahead,
        }
    }

    #[must_use]
    pub const fn lookback(&self) -> usize {
        self.lookback
    }

    #[must_use]
    pub const fn lookahead(&self) -> usize {
        self.lookahead
    }

    /// First entry near `pivot` whose word contains `query`
    ///
    /// `Higher` scans `displayed` in order, from position 0 when
    /// `include_pivot` is set and from position 1 otherwise, then the
    /// lookahead neighborhood of `pivot`. `Lower` scans only the lookback
    /// neighborhood, nearest first; `include_pivot` has no effect there.
    ///
    /// Returns `None` when nothing matches or `pivot` is outside the space.
    #[must_use]
    pub fn find(
        &self,
        query: &str,
        direction: Direction,
        displayed: &Window,
        pivot: &Index,
        include_pivot: bool,
    ) -> Option<Entry> {
        match direction {
            Direction::Higher => {
                let skip = usize::from(!include_pivot);
                if let Some(entry) = displayed.find_from(skip, query) {
                    return Some(entry.clone());
                }
                forward(pivot)
                    .ok()?
                    .take(self.lookahead)
                    .find(|entry| entry.word.contains(query))
            }
            Direction::Lower => backward(pivot)
                .ok()?
                .take(self.lookback)
                .find(|entry| entry.word.contains(query)),
        }
    }
}

impl Default for WindowSearch {
    fn default() -> Self {
        Self::new(DEFAULT_LOOKBACK, DEFAULT_LOOKAHEAD)
    }
}
