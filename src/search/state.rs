//! Per-session search state

use crate::core::{Alphabet, Index, MIN_LENGTH, Word};
use crate::navigation::Entry;
use num_traits::Zero;
use rustc_hash::FxHashSet;

/// Append-only record of words a session has landed on through search
///
/// Keeps visit order alongside a hash set so membership checks during random
/// search stay constant time.
#[derive(Debug, Clone, Default)]
pub struct History {
    order: Vec<Word>,
    seen: FxHashSet<Word>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a visit; returns `false` if the word was already present
    pub fn push(&mut self, word: Word) -> bool {
        if self.seen.contains(&word) {
            return false;
        }
        self.seen.insert(word.clone());
        self.order.push(word);
        true
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.seen.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Visited words, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.order.iter()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Word> {
        self.order.last()
    }
}

impl<const N: usize> From<[Word; N]> for History {
    fn from(words: [Word; N]) -> Self {
        let mut history = Self::new();
        for word in words {
            history.push(word);
        }
        history
    }
}

/// Where a session currently is, and where it has been
#[derive(Debug, Clone)]
pub struct SearchState {
    current: Entry,
    history: History,
}

impl SearchState {
    #[must_use]
    pub fn new(current: Entry) -> Self {
        Self {
            current,
            history: History::new(),
        }
    }

    #[must_use]
    pub const fn current(&self) -> &Entry {
        &self.current
    }

    #[must_use]
    pub const fn index(&self) -> &Index {
        &self.current.index
    }

    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    pub(crate) fn set_current(&mut self, entry: Entry) {
        self.current = entry;
    }

    /// Move to a search result and remember its word
    pub(crate) fn visit(&mut self, entry: Entry) {
        self.history.push(entry.word.clone());
        self.current = entry;
    }
}

impl Default for SearchState {
    /// A session starting at the first word
    fn default() -> Self {
        let first = Word::from_trusted(Alphabet::FIRST.to_string().repeat(MIN_LENGTH));
        Self::new(Entry::new(Index::zero(), first))
    }
}
