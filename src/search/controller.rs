//! Session-level search interface
//!
//! The controller is the only search component a front end talks to. It owns
//! the session state and runs the window scan before falling back to random
//! search.

use super::random::{DEFAULT_BUDGET, Probe, RandomSearch};
use super::source::{IndexSource, RngSource};
use super::state::SearchState;
use super::window::{DEFAULT_LOOKAHEAD, DEFAULT_LOOKBACK, WindowSearch};
use crate::core::{
    Alphabet, CodecError, Index, InvalidInput, MAX_LENGTH, MIN_LENGTH, Word, encode_word,
};
use crate::navigation::{Direction, Entry, Window, advance, retreat};
use rand::rngs::StdRng;
use tracing::debug;

/// Tunable search parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Entries scanned behind the current position for `Lower` searches
    pub lookback: usize,
    /// Entries scanned ahead of the displayed rows for `Higher` searches
    pub lookahead: usize,
    /// Random trials per search call
    pub budget: usize,
    /// Fixed seed for the random source; OS-seeded when `None`
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            lookback: DEFAULT_LOOKBACK,
            lookahead: DEFAULT_LOOKAHEAD,
            budget: DEFAULT_BUDGET,
            seed: None,
        }
    }
}

/// Build the word a literal jump lands on
///
/// Text that is already a valid length is used verbatim. Shorter text is
/// padded on the right with the zero-weight symbol.
///
/// # Errors
/// Returns `InvalidInput` if `query` is empty, longer than 32 symbols, or
/// contains a symbol outside the alphabet.
///
/// # Examples
/// ```
/// use wordspace::search::literal_word;
///
/// assert_eq!(literal_word("ab").unwrap().text(), "abaa");
/// assert_eq!(literal_word("hunter2").unwrap().text(), "hunter2");
/// assert!(literal_word("").is_err());
/// ```
pub fn literal_word(query: &str) -> Result<Word, InvalidInput> {
    if query.is_empty() {
        return Err(InvalidInput::Empty);
    }
    if let Some(c) = Alphabet::first_foreign(query) {
        return Err(InvalidInput::Symbol(c));
    }
    if query.len() > MAX_LENGTH {
        return Err(InvalidInput::Length(query.len()));
    }

    let mut text = query.to_string();
    while text.len() < MIN_LENGTH {
        text.push(Alphabet::FIRST);
    }
    Word::new(text)
}

/// A search session over the word space
pub struct SearchController<S = RngSource<StdRng>> {
    state: SearchState,
    window: WindowSearch,
    random: RandomSearch,
    source: S,
}

impl SearchController {
    /// Controller with the random source described by `config.seed`
    #[must_use]
    pub fn new(config: &SearchConfig) -> Self {
        Self::with_source(config, RngSource::from_seed_option(config.seed))
    }
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new(&SearchConfig::default())
    }
}

impl<S: IndexSource> SearchController<S> {
    /// Controller drawing random indices from `source`
    ///
    /// The session starts at index 0.
    pub fn with_source(config: &SearchConfig, source: S) -> Self {
        Self {
            state: SearchState::default(),
            window: WindowSearch::new(config.lookback, config.lookahead),
            random: RandomSearch::new(config.budget),
            source,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &SearchState {
        &self.state
    }

    #[must_use]
    pub const fn current(&self) -> &Entry {
        self.state.current()
    }

    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Move the session to an arbitrary index
    ///
    /// # Errors
    /// Returns `CodecError::OutOfRange` if `index` is outside the space; the
    /// state is left unchanged.
    pub fn jump_to_index(&mut self, index: Index) -> Result<Entry, CodecError> {
        let entry = Entry::at(index)?;
        debug!(index = %entry.index, "jump to index");
        self.state.set_current(entry.clone());
        Ok(entry)
    }

    /// Jump straight to the word built from `query`
    ///
    /// This is a direct jump, not a search: history is not touched.
    ///
    /// # Errors
    /// Returns `CodecError::InvalidInput` if `query` cannot be turned into a
    /// word (see [`literal_word`]) or names the redaction placeholder.
    ///
    /// # Examples
    /// ```
    /// use wordspace::search::SearchController;
    ///
    /// let mut session = SearchController::default();
    /// let word = session.jump_to_literal("ab").unwrap();
    /// assert_eq!(word.text(), "abaa");
    /// assert_eq!(session.current().index.to_string(), "8100");
    /// ```
    pub fn jump_to_literal(&mut self, query: &str) -> Result<Word, CodecError> {
        let word = literal_word(query)?;
        let index = encode_word(&word)?;
        debug!(query, word = %word, %index, "jump to literal");
        self.state.set_current(Entry::new(index, word.clone()));
        Ok(word)
    }

    /// Step to the next index; `None` at the end of the space
    pub fn step_next(&mut self) -> Option<Entry> {
        let next = advance(self.state.index())?;
        self.step_to(next)
    }

    /// Step to the previous index; `None` at index zero
    pub fn step_previous(&mut self) -> Option<Entry> {
        let previous = retreat(self.state.index())?;
        self.step_to(previous)
    }

    fn step_to(&mut self, index: Index) -> Option<Entry> {
        let entry = Entry::at(index).ok()?;
        self.state.set_current(entry.clone());
        Some(entry)
    }

    /// Find a word containing `query` in `direction` from the current position
    ///
    /// `displayed` is the caller's visible slice, beginning with the current
    /// entry; `include_pivot` allows that first row to match. The window scan
    /// runs first and random search only if it finds nothing. A match becomes
    /// the current entry and is added to the history.
    ///
    /// Returns `None` for an empty query or when neither phase finds a match.
    pub fn search(
        &mut self,
        query: &str,
        direction: Direction,
        displayed: &Window,
        include_pivot: bool,
    ) -> Option<Entry> {
        self.search_report(query, direction, displayed, include_pivot)
            .found
    }

    /// [`search`](Self::search), also reporting how the result was reached
    pub fn search_report(
        &mut self,
        query: &str,
        direction: Direction,
        displayed: &Window,
        include_pivot: bool,
    ) -> SearchReport {
        if query.is_empty() {
            return SearchReport::default();
        }

        let pivot = self.state.index();
        let window_match = self
            .window
            .find(query, direction, displayed, pivot, include_pivot);
        let report = if let Some(entry) = window_match {
            debug!(query, %direction, index = %entry.index, "window match");
            SearchReport {
                found: Some(entry),
                probe: None,
            }
        } else {
            debug!(
                query,
                %direction,
                budget = self.random.budget(),
                "no window match, falling back to random search"
            );
            let probe = self.random.probe(
                &mut self.source,
                query,
                direction,
                pivot,
                self.state.history(),
            );
            SearchReport {
                found: probe.best.clone(),
                probe: Some(probe),
            }
        };

        if let Some(entry) = &report.found {
            self.state.visit(entry.clone());
        }
        report
    }
}

/// Result of a search together with the random phase statistics
#[derive(Debug, Clone, Default)]
pub struct SearchReport {
    pub found: Option<Entry>,
    /// Present when the window scan came up empty and random search ran
    pub probe: Option<Probe>,
}

impl SearchReport {
    /// Whether the match came from the neighborhood scan
    #[must_use]
    pub const fn from_window(&self) -> bool {
        self.found.is_some() && self.probe.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{SENTINEL_WORD, Space, decode, encode};
    use crate::navigation::span;
    use crate::search::source::testing::{CountingSource, ScriptedSource};
    use num_bigint::BigUint;

    fn scripted(script: Vec<Index>) -> SearchController<ScriptedSource> {
        SearchController::with_source(&SearchConfig::default(), ScriptedSource::new(script))
    }

    fn idx(text: &str) -> Index {
        encode(text).unwrap()
    }

    #[test]
    fn literal_word_pads_short_queries() {
        assert_eq!(literal_word("ab").unwrap().text(), "abaa");
        assert_eq!(literal_word("x").unwrap().text(), "xaaa");
        assert_eq!(literal_word("abcd").unwrap().text(), "abcd");
        assert_eq!(literal_word(&"Q".repeat(32)).unwrap().len(), 32);
    }

    #[test]
    fn literal_word_rejects_bad_queries() {
        assert_eq!(literal_word(""), Err(InvalidInput::Empty));
        assert_eq!(literal_word(&"a".repeat(33)), Err(InvalidInput::Length(33)));
        assert_eq!(literal_word("ab c"), Err(InvalidInput::Symbol(' ')));
    }

    #[test]
    fn jump_to_literal_sets_state() {
        let mut session = SearchController::default();
        let word = session.jump_to_literal("ab").unwrap();
        assert_eq!(word.text(), "abaa");
        assert_eq!(session.current().index, BigUint::from(8100u32));
        assert_eq!(decode(&session.current().index).unwrap(), word);
        assert!(session.state().history().is_empty());
    }

    #[test]
    fn jump_to_literal_failure_keeps_state() {
        let mut session = SearchController::default();
        session.jump_to_literal("start").unwrap();
        let before = session.current().clone();

        assert!(session.jump_to_literal("").is_err());
        assert!(session.jump_to_literal("no way").is_err());
        assert_eq!(
            session.jump_to_literal(SENTINEL_WORD),
            Err(CodecError::InvalidInput(InvalidInput::Sentinel))
        );
        assert_eq!(session.current(), &before);
    }

    #[test]
    fn steps_move_one_index() {
        let mut session = SearchController::default();
        assert_eq!(session.step_next().unwrap().word.text(), "aaab");
        assert_eq!(session.step_next().unwrap().word.text(), "aaac");
        assert_eq!(session.step_previous().unwrap().word.text(), "aaab");
    }

    #[test]
    fn steps_stop_at_boundaries() {
        let mut session = SearchController::default();
        assert!(session.step_previous().is_none());
        assert_eq!(session.current().index, BigUint::from(0u32));

        let last = Space::global().last();
        session.jump_to_index(last.clone()).unwrap();
        assert!(session.step_next().is_none());
        assert_eq!(session.current().index, last);
    }

    #[test]
    fn jump_to_index_rejects_out_of_range() {
        let mut session = SearchController::default();
        let total = Space::global().total().clone();
        assert_eq!(session.jump_to_index(total), Err(CodecError::OutOfRange));
        assert_eq!(session.current().index, BigUint::from(0u32));
    }

    #[test]
    fn window_match_skips_random_search() {
        let source = CountingSource::new(ScriptedSource::new(vec![]));
        let mut session = SearchController::with_source(&SearchConfig::default(), source);

        let target = idx("test");
        session.jump_to_index(&target - 3u32).unwrap();
        let displayed = span(&session.current().index, 10).unwrap();

        let found = session
            .search("test", Direction::Higher, &displayed, false)
            .unwrap();
        assert_eq!(found.index, target);
        assert_eq!(found.word.text(), "test");
        assert_eq!(session.source().draws(), 0);
        assert_eq!(session.current(), &found);
        assert!(session.state().history().contains(&found.word));
    }

    #[test]
    fn falls_back_to_random_search() {
        let target = idx("zzmyqueryzz");
        let mut session = scripted(vec![target.clone()]);
        let displayed = span(&session.current().index, 10).unwrap();

        let found = session
            .search("myquery", Direction::Higher, &displayed, true)
            .unwrap();
        assert_eq!(found.index, target);
        assert_eq!(session.source().draws(), DEFAULT_BUDGET);
        assert_eq!(session.state().history().len(), 1);
    }

    #[test]
    fn random_search_does_not_repeat_visited_words() {
        let target = idx("zzmyqueryzz");
        let mut session = scripted(vec![target.clone()]);

        let first = session.search("myquery", Direction::Higher, &Window::default(), true);
        assert_eq!(first.map(|e| e.index), Some(target.clone()));

        // Back to the start: the only scripted match is now in the history
        session.jump_to_index(BigUint::from(0u32)).unwrap();
        let second = session.search("myquery", Direction::Higher, &Window::default(), true);
        assert!(second.is_none());
        assert_eq!(session.current().index, BigUint::from(0u32));
    }

    #[test]
    fn report_names_the_phase() {
        let mut session = scripted(vec![idx("zzmyqueryzz")]);
        session.jump_to_index(idx("tesq")).unwrap();
        let displayed = span(&session.current().index, 5).unwrap();

        let near = session.search_report("test", Direction::Higher, &displayed, false);
        assert!(near.from_window());

        let far = session.search_report("myquery", Direction::Higher, &Window::default(), false);
        assert!(!far.from_window());
        let probe = far.probe.unwrap();
        assert_eq!(probe.trials, DEFAULT_BUDGET);
        assert_eq!(probe.hits, DEFAULT_BUDGET);
        assert_eq!(far.found.unwrap().word.text(), "zzmyqueryzz");
    }

    #[test]
    fn empty_query_does_nothing() {
        let mut session = scripted(vec![idx("aaaa")]);
        let displayed = span(&session.current().index, 5).unwrap();
        let found = session.search("", Direction::Higher, &displayed, true);
        assert!(found.is_none());
        assert_eq!(session.source().draws(), 0);
    }

    #[test]
    fn lower_search_uses_lookback() {
        let mut session = scripted(vec![]);
        session.jump_to_index(idx("test") + 10u32).unwrap();

        let found = session
            .search("test", Direction::Lower, &Window::default(), false)
            .unwrap();
        assert_eq!(found.word.text(), "test");
        assert_eq!(session.source().draws(), 0);
    }

    #[test]
    fn seeded_sessions_agree() {
        let config = SearchConfig {
            seed: Some(21),
            ..SearchConfig::default()
        };
        let run = || {
            let mut session = SearchController::new(&config);
            session.search("Zq", Direction::Higher, &Window::default(), false)
        };
        assert_eq!(run(), run());
    }
}
