//! One-shot search command
//!
//! Builds a session at a starting index, renders the same displayed slice a
//! list view would show there, and runs one controller search.

use crate::core::{CodecError, Index, parse_index};
use crate::navigation::{Direction, Entry, span};
use crate::search::{SearchConfig, SearchController, SearchReport};
use std::time::{Duration, Instant};

/// Parameters of a single search
pub struct SearchRequest {
    pub query: String,
    /// Starting index as decimal text; index 0 when `None`
    pub from: Option<String>,
    pub direction: Direction,
    /// Rows in the displayed slice
    pub rows: usize,
    /// Whether the starting entry itself may match
    pub include_current: bool,
}

impl SearchRequest {
    #[must_use]
    pub const fn new(query: String, direction: Direction) -> Self {
        Self {
            query,
            from: None,
            direction,
            rows: 30,
            include_current: false,
        }
    }
}

/// Outcome of a single search
pub struct SearchOutcome {
    pub query: String,
    pub direction: Direction,
    pub start: Entry,
    pub report: SearchReport,
    pub budget: usize,
    pub duration: Duration,
}

/// Run one search as described by `request`
///
/// # Errors
/// Returns an error if the starting index is not a number or is outside the space.
pub fn run_search(
    request: &SearchRequest,
    config: &SearchConfig,
) -> Result<SearchOutcome, CodecError> {
    let from = match &request.from {
        Some(text) => parse_index(text)?,
        None => Index::default(),
    };

    let mut session = SearchController::new(config);
    let start = session.jump_to_index(from)?;
    let displayed = span(&start.index, request.rows)?;

    let timer = Instant::now();
    let report = session.search_report(
        &request.query,
        request.direction,
        &displayed,
        request.include_current,
    );

    Ok(SearchOutcome {
        query: request.query.clone(),
        direction: request.direction,
        start,
        report,
        budget: config.budget,
        duration: timer.elapsed(),
    })
}
