//! Stepping through the space and building neighborhoods
//!
//! `advance` and `retreat` stop at the ends of the space. Neighborhoods treat
//! the space as a ring, so the entry before index 0 is the last word.

use super::window::{Entry, Window};
use crate::core::{CodecError, Index, Space, decode};
use num_traits::Zero;
use std::fmt;

/// Which way to move through the space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards larger indices
    Higher,
    /// Towards smaller indices
    Lower,
}

impl Direction {
    /// `Lower` when `lower` is set, `Higher` otherwise
    #[must_use]
    pub const fn from_lower(lower: bool) -> Self {
        if lower { Self::Lower } else { Self::Higher }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Higher => write!(f, "higher"),
            Self::Lower => write!(f, "lower"),
        }
    }
}

/// Next index, or `None` at the end of the space
///
/// # Examples
/// ```
/// use num_bigint::BigUint;
/// use wordspace::core::Space;
/// use wordspace::navigation::advance;
///
/// assert_eq!(advance(&BigUint::from(7u32)), Some(BigUint::from(8u32)));
/// assert_eq!(advance(&Space::global().last()), None);
/// ```
#[must_use]
pub fn advance(index: &Index) -> Option<Index> {
    let next = index + 1u32;
    Space::global().contains(&next).then_some(next)
}

/// Previous index, or `None` at index zero
///
/// Indices past the end of the space are not valid starting points and also
/// yield `None`.
#[must_use]
pub fn retreat(index: &Index) -> Option<Index> {
    if index.is_zero() || !Space::global().contains(index) {
        return None;
    }
    Some(index - 1u32)
}

/// One step in `direction`, wrapping around the ends of the space
fn wrapping_step(index: &Index, direction: Direction) -> Index {
    let space = Space::global();
    match direction {
        Direction::Higher => {
            let next = index + 1u32;
            if space.contains(&next) {
                next
            } else {
                Index::zero()
            }
        }
        Direction::Lower => {
            if index.is_zero() {
                space.last()
            } else {
                index - 1u32
            }
        }
    }
}

/// Lazy, unbounded walk away from a pivot
///
/// Yields the entry at distance 1, 2, 3, ... from the pivot, wrapping around
/// the space. Only entries actually pulled are decoded.
#[derive(Debug, Clone)]
pub struct Neighbors {
    cursor: Index,
    direction: Direction,
}

impl Iterator for Neighbors {
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        self.cursor = wrapping_step(&self.cursor, self.direction);
        let word = decode(&self.cursor).ok()?;
        Some(Entry::new(self.cursor.clone(), word))
    }
}

fn neighbors(pivot: &Index, direction: Direction) -> Result<Neighbors, CodecError> {
    if !Space::global().contains(pivot) {
        return Err(CodecError::OutOfRange);
    }
    Ok(Neighbors {
        cursor: pivot.clone(),
        direction,
    })
}

/// Entries after `pivot`, nearest first
///
/// # Errors
/// Returns `CodecError::OutOfRange` if `pivot` is outside the space.
pub fn forward(pivot: &Index) -> Result<Neighbors, CodecError> {
    neighbors(pivot, Direction::Higher)
}

/// Entries before `pivot`, nearest first
///
/// # Errors
/// Returns `CodecError::OutOfRange` if `pivot` is outside the space.
pub fn backward(pivot: &Index) -> Result<Neighbors, CodecError> {
    neighbors(pivot, Direction::Lower)
}

/// The `k` entries following `pivot`, wrapping past the last word to index 0
///
/// # Errors
/// Returns `CodecError::OutOfRange` if `pivot` is outside the space.
pub fn lookahead(pivot: &Index, k: usize) -> Result<Window, CodecError> {
    Ok(forward(pivot)?.take(k).collect())
}

/// The `k` entries preceding `pivot`, wrapping past index 0 to the last word
///
/// # Errors
/// Returns `CodecError::OutOfRange` if `pivot` is outside the space.
///
/// # Examples
/// ```
/// use num_bigint::BigUint;
/// use wordspace::navigation::lookback;
///
/// let window = lookback(&BigUint::from(1u32), 2).unwrap();
/// assert_eq!(window[0].word.text(), "aaaa");
/// assert_eq!(window[1].word.text(), "````````````````````````````````");
/// ```
pub fn lookback(pivot: &Index, k: usize) -> Result<Window, CodecError> {
    Ok(backward(pivot)?.take(k).collect())
}

/// `k` consecutive entries starting with `start` itself
///
/// This is the shape of a rendered list slice: the first row is `start` and
/// the rest follow it, wrapping at the end of the space.
///
/// # Errors
/// Returns `CodecError::OutOfRange` if `start` is outside the space.
pub fn span(start: &Index, k: usize) -> Result<Window, CodecError> {
    if k == 0 {
        return Ok(Window::default());
    }
    let first = Entry::at(start.clone())?;
    Ok(std::iter::once(first)
        .chain(forward(start)?.take(k - 1))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    fn idx(n: u32) -> Index {
        BigUint::from(n)
    }

    fn indices(window: &Window) -> Vec<Index> {
        window.iter().map(|e| e.index.clone()).collect()
    }

    #[test]
    fn advance_and_retreat_inside_space() {
        assert_eq!(advance(&idx(0)), Some(idx(1)));
        assert_eq!(retreat(&idx(1)), Some(idx(0)));
    }

    #[test]
    fn advance_stops_at_last_index() {
        let last = Space::global().last();
        assert_eq!(advance(&last), None);
        assert_eq!(advance(&(&last - 1u32)), Some(last));
    }

    #[test]
    fn retreat_stops_at_zero() {
        assert_eq!(retreat(&idx(0)), None);
    }

    #[test]
    fn retreat_rejects_out_of_range() {
        assert_eq!(retreat(Space::global().total()), None);
    }

    #[test]
    fn lookahead_is_nearest_first() {
        let window = lookahead(&idx(10), 3).unwrap();
        assert_eq!(indices(&window), vec![idx(11), idx(12), idx(13)]);
        assert_eq!(window[0].word.text(), "aaal");
    }

    #[test]
    fn lookback_is_nearest_first() {
        let window = lookback(&idx(10), 3).unwrap();
        assert_eq!(indices(&window), vec![idx(9), idx(8), idx(7)]);
    }

    #[test]
    fn lookback_wraps_below_zero() {
        let last = Space::global().last();
        let window = lookback(&idx(1), 3).unwrap();
        assert_eq!(indices(&window), vec![idx(0), last.clone(), &last - 1u32]);
    }

    #[test]
    fn lookahead_wraps_past_end() {
        let last = Space::global().last();
        let pivot = &last - 1u32;
        let window = lookahead(&pivot, 3).unwrap();
        assert_eq!(indices(&window), vec![last, idx(0), idx(1)]);
        assert_eq!(window[1].word.text(), "aaaa");
    }

    #[test]
    fn windows_reject_invalid_pivot() {
        let total = Space::global().total();
        assert_eq!(lookahead(total, 1), Err(CodecError::OutOfRange));
        assert_eq!(lookback(total, 1), Err(CodecError::OutOfRange));
        assert_eq!(span(total, 1), Err(CodecError::OutOfRange));
    }

    #[test]
    fn zero_sized_windows() {
        assert!(lookahead(&idx(5), 0).unwrap().is_empty());
        assert!(lookback(&idx(5), 0).unwrap().is_empty());
        assert!(span(&idx(5), 0).unwrap().is_empty());
    }

    #[test]
    fn span_starts_at_start() {
        let window = span(&idx(100), 4).unwrap();
        assert_eq!(
            indices(&window),
            vec![idx(100), idx(101), idx(102), idx(103)]
        );
    }

    #[test]
    fn neighbors_decode_lazily() {
        let mut walk = forward(&idx(0)).unwrap();
        assert_eq!(walk.next().unwrap().word.text(), "aaab");
        assert_eq!(walk.next().unwrap().word.text(), "aaac");
    }

    #[test]
    fn direction_helpers() {
        assert_eq!(Direction::from_lower(true), Direction::Lower);
        assert_eq!(Direction::from_lower(false), Direction::Higher);
        assert_eq!(Direction::Lower.to_string(), "lower");
    }
}
