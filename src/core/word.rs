//! Word representation
//!
//! A Word is a 4-32 symbol string over the [`Alphabet`].

use super::alphabet::Alphabet;
use super::error::InvalidInput;
use super::space::{MAX_LENGTH, MIN_LENGTH};
use std::fmt;

/// A validated word of the space
///
/// Every symbol is ASCII, so byte length and symbol count coincide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `InvalidInput` if:
    /// - The text is empty
    /// - Length is outside 4-32
    /// - Any character is not in the alphabet
    ///
    /// # Examples
    /// ```
    /// use wordspace::core::Word;
    ///
    /// let word = Word::new("hunter2").unwrap();
    /// assert_eq!(word.text(), "hunter2");
    ///
    /// assert!(Word::new("abc").is_err());
    /// assert!(Word::new("with space").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, InvalidInput> {
        let text = text.into();

        if let Some(c) = Alphabet::first_foreign(&text) {
            return Err(InvalidInput::Symbol(c));
        }
        // Safe to use byte length from here on: all symbols are ASCII
        match text.len() {
            0 => Err(InvalidInput::Empty),
            len if !(MIN_LENGTH..=MAX_LENGTH).contains(&len) => Err(InvalidInput::Length(len)),
            _ => Ok(Self { text }),
        }
    }

    /// Wrap text that is already known to be valid
    pub(crate) fn from_trusted(text: String) -> Self {
        debug_assert!(Self::new(text.as_str()).is_ok(), "untrusted word {text:?}");
        Self { text }
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; kept for the `len`/`is_empty` pair
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether `query` occurs anywhere in the word
    ///
    /// An empty query matches every word.
    #[inline]
    #[must_use]
    pub fn contains(&self, query: &str) -> bool {
        self.text.contains(query)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl std::str::FromStr for Word {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
