//! Per-length and cumulative counts of the word space
//!
//! Words of length L occupy the half-open index range
//! `[offset(L), offset(L) + 90^L)`. Lengths are laid out in ascending order, so
//! the shortest words come first.

use super::alphabet::Alphabet;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::ops::RangeInclusive;
use std::sync::LazyLock;

/// Arbitrary-precision ordinal of a word within the space
pub type Index = BigUint;

/// Shortest valid word length
pub const MIN_LENGTH: usize = 4;

/// Longest valid word length
pub const MAX_LENGTH: usize = 32;

/// Number of length buckets
pub const BUCKETS: usize = MAX_LENGTH - MIN_LENGTH + 1;

static SPACE: LazyLock<Space> = LazyLock::new(Space::build);

/// Precomputed layout of the word space
#[derive(Debug)]
pub struct Space {
    counts: Vec<BigUint>,
    offsets: Vec<BigUint>,
    total: BigUint,
}

impl Space {
    /// The shared, lazily built space
    #[must_use]
    pub fn global() -> &'static Self {
        &SPACE
    }

    fn build() -> Self {
        let mut counts = Vec::with_capacity(BUCKETS);
        let mut offsets = Vec::with_capacity(BUCKETS);
        let mut total = BigUint::zero();
        let mut power = BigUint::one();

        for length in 0..=MAX_LENGTH {
            if length >= MIN_LENGTH {
                offsets.push(total.clone());
                total += &power;
                counts.push(power.clone());
            }
            power *= Alphabet::RADIX;
        }

        Self {
            counts,
            offsets,
            total,
        }
    }

    /// Valid word lengths, ascending
    #[must_use]
    pub const fn lengths() -> RangeInclusive<usize> {
        MIN_LENGTH..=MAX_LENGTH
    }

    /// Number of words of exactly `length` symbols (`90^length`)
    ///
    /// # Panics
    /// Panics if `length` is outside `[MIN_LENGTH, MAX_LENGTH]`
    #[inline]
    #[must_use]
    pub fn count(&self, length: usize) -> &BigUint {
        &self.counts[length - MIN_LENGTH]
    }

    /// Index of the first word of `length` symbols
    ///
    /// # Panics
    /// Panics if `length` is outside `[MIN_LENGTH, MAX_LENGTH]`
    #[inline]
    #[must_use]
    pub fn offset(&self, length: usize) -> &BigUint {
        &self.offsets[length - MIN_LENGTH]
    }

    /// Total number of words in the space
    #[inline]
    #[must_use]
    pub const fn total(&self) -> &BigUint {
        &self.total
    }

    /// Index of the last word in the space
    #[must_use]
    pub fn last(&self) -> BigUint {
        &self.total - 1u32
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, index: &BigUint) -> bool {
        index < &self.total
    }

    /// Length bucket that `index` falls in, or `None` if out of range
    ///
    /// # Examples
    /// ```
    /// use num_bigint::BigUint;
    /// use wordspace::core::Space;
    ///
    /// let space = Space::global();
    /// assert_eq!(space.length_of(&BigUint::from(0u32)), Some(4));
    /// assert_eq!(space.length_of(&BigUint::from(65_610_000u32)), Some(5));
    /// assert_eq!(space.length_of(space.total()), None);
    /// ```
    #[must_use]
    pub fn length_of(&self, index: &BigUint) -> Option<usize> {
        if !self.contains(index) {
            return None;
        }
        // offsets[0] is zero, so at least one offset is <= index
        let bucket = self.offsets.partition_point(|offset| offset <= index) - 1;
        Some(bucket + MIN_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pow90(length: usize) -> BigUint {
        BigUint::from(90u32).pow(length as u32)
    }

    #[test]
    fn total_matches_known_value() {
        let expected: BigUint = "347226453737445082718209458466617977528089887640449438201510000"
            .parse()
            .unwrap();
        assert_eq!(Space::global().total(), &expected);
        assert_eq!(Space::global().total().bits(), 208);
    }

    #[test]
    fn total_is_sum_of_counts() {
        let space = Space::global();
        let sum: BigUint = Space::lengths().map(pow90).sum();
        assert_eq!(space.total(), &sum);
        assert_eq!(
            space.total(),
            &(space.offset(MAX_LENGTH) + space.count(MAX_LENGTH))
        );
    }

    #[test]
    fn offsets_are_cumulative() {
        let space = Space::global();
        assert!(space.offset(MIN_LENGTH).is_zero());

        for length in Space::lengths() {
            let expected: BigUint = (MIN_LENGTH..length).map(pow90).sum();
            assert_eq!(space.offset(length), &expected, "offset({length})");
            assert_eq!(space.count(length), &pow90(length), "count({length})");
        }
    }

    #[test]
    fn offsets_strictly_increase() {
        let space = Space::global();
        for length in MIN_LENGTH..MAX_LENGTH {
            assert!(space.offset(length) < space.offset(length + 1));
        }
    }

    #[test]
    fn length_of_bucket_edges() {
        let space = Space::global();
        for length in Space::lengths() {
            let first = space.offset(length).clone();
            let last = &first + space.count(length) - 1u32;
            assert_eq!(space.length_of(&first), Some(length));
            assert_eq!(space.length_of(&last), Some(length));
        }
        assert_eq!(space.length_of(&space.last()), Some(MAX_LENGTH));
        assert_eq!(space.length_of(space.total()), None);
    }
}
