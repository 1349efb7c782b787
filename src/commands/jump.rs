//! Literal jump command

use crate::core::{CodecError, Word};
use crate::navigation::Entry;
use crate::search::SearchController;

/// Where a literal jump landed
pub struct JumpResult {
    pub query: String,
    pub entry: Entry,
    /// The query had to be padded to reach the minimum length
    pub padded: bool,
}

/// Jump to the word built from `query`
///
/// # Errors
/// Returns an error if `query` cannot be turned into a word.
pub fn jump_to_text(query: &str) -> Result<JumpResult, CodecError> {
    let mut session = SearchController::default();
    let word: Word = session.jump_to_literal(query)?;
    Ok(JumpResult {
        query: query.to_string(),
        padded: word.text() != query,
        entry: session.current().clone(),
    })
}
