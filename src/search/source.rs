//! Random index sources
//!
//! Random search draws indices through the [`IndexSource`] trait so tests can
//! replace the generator with a scripted one.

use crate::core::Index;
use num_bigint::BigUint;
use num_traits::Zero;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// A source of uniformly distributed indices
pub trait IndexSource {
    /// Draw an index uniformly from `[0, bound)`
    ///
    /// A zero bound yields zero.
    fn sample_below(&mut self, bound: &Index) -> Index;
}

impl<S: IndexSource + ?Sized> IndexSource for &mut S {
    fn sample_below(&mut self, bound: &Index) -> Index {
        (**self).sample_below(bound)
    }
}

/// Draw a uniform value below `bound` by rejection sampling
///
/// Random bytes are masked down to `bound.bits()` bits and redrawn until the
/// value falls below `bound`, so every value is equally likely. At least half
/// of all draws are accepted.
pub fn uniform_below<R: RngCore + ?Sized>(rng: &mut R, bound: &BigUint) -> BigUint {
    if bound.is_zero() {
        return BigUint::zero();
    }
    let bits = bound.bits();
    let len = bits.div_ceil(8) as usize;
    let excess = (len as u64 * 8 - bits) as u32;
    let mut bytes = vec![0u8; len];

    loop {
        rng.fill_bytes(&mut bytes);
        bytes[0] &= u8::MAX >> excess;
        let candidate = BigUint::from_bytes_be(&bytes);
        if candidate < *bound {
            return candidate;
        }
    }
}

/// [`IndexSource`] backed by any `rand` generator
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: RngCore> RngSource<R> {
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Deterministic source; the same seed replays the same draws
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from the operating system
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Seeded when `seed` is given, OS-seeded otherwise
    #[must_use]
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_os_rng, Self::seeded)
    }
}

impl<R: RngCore> IndexSource for RngSource<R> {
    fn sample_below(&mut self, bound: &Index) -> Index {
        uniform_below(&mut self.rng, bound)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Replays a fixed list of indices, cycling, and counts draws
    pub struct ScriptedSource {
        script: Vec<Index>,
        draws: usize,
    }

    impl ScriptedSource {
        pub fn new(script: Vec<Index>) -> Self {
            Self { script, draws: 0 }
        }

        pub fn draws(&self) -> usize {
            self.draws
        }
    }

    impl IndexSource for ScriptedSource {
        fn sample_below(&mut self, bound: &Index) -> Index {
            let value = if self.script.is_empty() {
                Index::zero()
            } else {
                self.script[self.draws % self.script.len()].clone()
            };
            self.draws += 1;
            assert!(value < *bound, "scripted index {value} is out of range");
            value
        }
    }

    /// Wraps another source and counts draws
    pub struct CountingSource<S> {
        inner: S,
        draws: usize,
    }

    impl<S: IndexSource> CountingSource<S> {
        pub fn new(inner: S) -> Self {
            Self { inner, draws: 0 }
        }

        pub fn draws(&self) -> usize {
            self.draws
        }
    }

    impl<S: IndexSource> IndexSource for CountingSource<S> {
        fn sample_below(&mut self, bound: &Index) -> Index {
            self.draws += 1;
            self.inner.sample_below(bound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Space;

    #[test]
    fn samples_stay_below_bound() {
        let mut source = RngSource::seeded(1);
        let total = Space::global().total();
        for _ in 0..200 {
            assert!(source.sample_below(total) < *total);
        }
    }

    #[test]
    fn small_bounds_cover_every_value() {
        let mut source = RngSource::seeded(2);
        let bound = BigUint::from(10u32);
        let mut seen = [false; 10];
        for _ in 0..1000 {
            let value = source.sample_below(&bound);
            let slot: usize = value.try_into().unwrap();
            seen[slot] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn degenerate_bounds() {
        let mut source = RngSource::seeded(3);
        assert!(source.sample_below(&BigUint::zero()).is_zero());
        for _ in 0..20 {
            assert!(source.sample_below(&BigUint::from(1u32)).is_zero());
        }
    }

    #[test]
    fn same_seed_same_draws() {
        let total = Space::global().total();
        let mut a = RngSource::seeded(99);
        let mut b = RngSource::seeded(99);
        for _ in 0..20 {
            assert_eq!(a.sample_below(total), b.sample_below(total));
        }
    }

    #[test]
    fn samples_reach_the_top_bucket() {
        // Almost all of the space is 32-symbol words
        let space = Space::global();
        let mut source = RngSource::seeded(4);
        let long = (0..100)
            .filter(|_| space.length_of(&source.sample_below(space.total())) == Some(32))
            .count();
        assert!(long > 90, "only {long} of 100 samples were 32 symbols long");
    }
}
