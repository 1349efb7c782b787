//! Codec error type
//!
//! Every failure in the codec and navigation layers is one of two kinds:
//! an index outside the space, or text that is not a valid word.

use super::space::{MAX_LENGTH, MIN_LENGTH};
use std::fmt;

/// Error returned by codec and navigation operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Index is not below the size of the space
    OutOfRange,
    /// Text cannot be used as a word or index
    InvalidInput(InvalidInput),
}

/// Reason a piece of text was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    Empty,
    Length(usize),
    Symbol(char),
    /// The redaction placeholder, which has no index of its own
    Sentinel,
    NotANumber,
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange => write!(f, "Index is outside the word space"),
            Self::InvalidInput(reason) => write!(f, "{reason}"),
        }
    }
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Input is empty"),
            Self::Length(len) => {
                write!(
                    f,
                    "Word must be {MIN_LENGTH}-{MAX_LENGTH} symbols long, got {len}"
                )
            }
            Self::Symbol(c) => write!(f, "Symbol {c:?} is not in the alphabet"),
            Self::Sentinel => write!(f, "The redaction placeholder has no index"),
            Self::NotANumber => write!(f, "Index must be a non-negative decimal integer"),
        }
    }
}

impl std::error::Error for CodecError {}

impl From<InvalidInput> for CodecError {
    fn from(reason: InvalidInput) -> Self {
        Self::InvalidInput(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            CodecError::OutOfRange.to_string(),
            "Index is outside the word space"
        );
        assert_eq!(
            CodecError::from(InvalidInput::Length(2)).to_string(),
            "Word must be 4-32 symbols long, got 2"
        );
        assert_eq!(
            CodecError::from(InvalidInput::Symbol(' ')).to_string(),
            "Symbol ' ' is not in the alphabet"
        );
    }
}
