//! Index and word lookup commands
//!
//! Converts a single index or word and reports where it sits in the space.

use crate::core::{CodecError, Index, SENTINEL_INDEX, Space, Word, decode, encode, parse_index};

/// Where one word sits in the space
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    pub index: Index,
    pub word: Word,
    /// Length bucket of the index
    pub length: usize,
    /// Position inside the length bucket
    pub position: Index,
    /// The index is the redacted one and `word` is the placeholder
    pub redacted: bool,
}

impl LookupResult {
    fn locate(index: Index, word: Word) -> Result<Self, CodecError> {
        let space = Space::global();
        let length = space.length_of(&index).ok_or(CodecError::OutOfRange)?;
        let position = &index - space.offset(length);
        let redacted = index == *SENTINEL_INDEX;
        Ok(Self {
            index,
            word,
            length,
            position,
            redacted,
        })
    }

    /// Fraction of the space that comes before this index
    #[must_use]
    pub fn fraction(&self) -> f64 {
        use num_traits::ToPrimitive;

        let total = Space::global().total().to_f64().unwrap_or(f64::INFINITY);
        self.index.to_f64().map_or(0.0, |index| index / total)
    }
}

/// Decode a decimal index given on the command line
///
/// # Errors
/// Returns an error if the text is not a number or is outside the space.
pub fn lookup_index(text: &str) -> Result<LookupResult, CodecError> {
    let index = parse_index(text)?;
    let word = decode(&index)?;
    LookupResult::locate(index, word)
}

/// Encode a word given on the command line
///
/// # Errors
/// Returns an error if the text is not a valid word.
pub fn lookup_word(text: &str) -> Result<LookupResult, CodecError> {
    let index = encode(text)?;
    let word = decode(&index)?;
    LookupResult::locate(index, word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SENTINEL_WORD;
    use num_bigint::BigUint;

    #[test]
    fn lookup_index_reports_bucket() {
        let result = lookup_index("65610001").unwrap();
        assert_eq!(result.word.text(), "aaaab");
        assert_eq!(result.length, 5);
        assert_eq!(result.position, BigUint::from(1u32));
        assert!(!result.redacted);
    }

    #[test]
    fn lookup_word_round_trips() {
        let result = lookup_word("test").unwrap();
        assert_eq!(result.index, BigUint::from(13_885_039u32));
        assert_eq!(result.word.text(), "test");
        assert_eq!(result.length, 4);
        assert_eq!(result.position, result.index);
    }

    #[test]
    fn lookup_flags_redacted_index() {
        let result = lookup_index(&SENTINEL_INDEX.to_string()).unwrap();
        assert!(result.redacted);
        assert_eq!(result.word.text(), SENTINEL_WORD);
        assert_eq!(result.length, 29);
    }

    #[test]
    fn lookup_errors() {
        assert!(lookup_index("abc").is_err());
        assert!(lookup_word("abc").is_err());
        assert_eq!(
            lookup_index(&Space::global().total().to_string()),
            Err(CodecError::OutOfRange)
        );
    }

    #[test]
    fn fraction_spans_unit_interval() {
        assert!(lookup_index("0").unwrap().fraction().abs() < f64::EPSILON);
        let last = lookup_index(&Space::global().last().to_string()).unwrap();
        assert!(last.fraction() > 0.999 && last.fraction() <= 1.0);
    }
}
