//! Monte-Carlo nearest-match search over the whole space
//!
//! The space is far too large to scan, so a fixed number of indices are drawn
//! uniformly at random and the matching candidate closest to the current
//! position (in the requested direction) is kept. A match can exist and still
//! be missed; the budget trades recall for latency.

use super::source::IndexSource;
use super::state::History;
use crate::core::{Index, PLACEHOLDER_INDEX, Space, decode, encode_word};
use crate::navigation::{Direction, Entry};
use tracing::{debug, trace};

/// Trials per search call
pub const DEFAULT_BUDGET: usize = 1000;

/// Outcome of one random search call
#[derive(Debug, Clone, Default)]
pub struct Probe {
    /// Closest accepted candidate, if any
    pub best: Option<Entry>,
    /// Indices drawn
    pub trials: usize,
    /// Draws whose word contained the query
    pub hits: usize,
    /// Hits that were on the requested side and not yet visited
    pub accepted: usize,
}

/// Bounded random search
#[derive(Debug, Clone, Copy)]
pub struct RandomSearch {
    budget: usize,
}

impl RandomSearch {
    #[must_use]
    pub const fn new(budget: usize) -> Self {
        Self { budget }
    }

    #[must_use]
    pub const fn budget(&self) -> usize {
        self.budget
    }

    /// Run exactly `budget` trials and report the closest match
    ///
    /// A candidate is accepted when its word contains `query`, it lies strictly
    /// on the `direction` side of `current`, and its word is not in `history`.
    /// Among accepted candidates the one nearest to `current` wins; on equal
    /// distance the first one found is kept.
    pub fn probe<S: IndexSource + ?Sized>(
        &self,
        source: &mut S,
        query: &str,
        direction: Direction,
        current: &Index,
        history: &History,
    ) -> Probe {
        let total = Space::global().total();
        let mut probe = Probe::default();
        let mut best_distance: Option<Index> = None;

        for _ in 0..self.budget {
            probe.trials += 1;
            let sampled = source.sample_below(total);
            let Ok(word) = decode(&sampled) else {
                continue;
            };
            if !word.contains(query) {
                continue;
            }
            probe.hits += 1;

            // The placeholder only has an index when drawn at its natural position
            let index = match encode_word(&word) {
                Ok(index) => index,
                Err(_) if sampled == *PLACEHOLDER_INDEX => sampled,
                Err(_) => continue,
            };

            let distance = match direction {
                Direction::Higher if index > *current => &index - current,
                Direction::Lower if index < *current => current - &index,
                _ => continue,
            };
            if history.contains(&word) {
                continue;
            }
            probe.accepted += 1;

            if best_distance.as_ref().is_none_or(|best| distance < *best) {
                trace!(%index, word = %word, %distance, "new closest candidate");
                best_distance = Some(distance);
                probe.best = Some(Entry::new(index, word));
            }
        }

        debug!(
            query,
            %direction,
            trials = probe.trials,
            hits = probe.hits,
            accepted = probe.accepted,
            found = probe.best.is_some(),
            "random probe finished"
        );
        probe
    }

    /// Closest match found within the budget, or `None`
    pub fn find<S: IndexSource + ?Sized>(
        &self,
        source: &mut S,
        query: &str,
        direction: Direction,
        current: &Index,
        history: &History,
    ) -> Option<Entry> {
        self.probe(source, query, direction, current, history).best
    }
}

impl Default for RandomSearch {
    fn default() -> Self {
        Self::new(DEFAULT_BUDGET)
    }
}
