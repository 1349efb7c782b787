//! Neighborhood listing command

use crate::core::{CodecError, parse_index};
use crate::navigation::{Entry, Window, lookahead, lookback};

/// Entries around a pivot
pub struct NeighborsResult {
    pub pivot: Entry,
    /// Nearest first, going backward
    pub before: Window,
    /// Nearest first, going forward
    pub after: Window,
}

/// List `before` entries behind and `after` entries ahead of an index
///
/// # Errors
/// Returns an error if the index text is not a number or is outside the space.
pub fn list_neighbors(
    index_text: &str,
    before: usize,
    after: usize,
) -> Result<NeighborsResult, CodecError> {
    let index = parse_index(index_text)?;
    let before = lookback(&index, before)?;
    let after = lookahead(&index, after)?;
    let pivot = Entry::at(index)?;
    Ok(NeighborsResult {
        pivot,
        before,
        after,
    })
}
