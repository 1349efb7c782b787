//! Index/word pairs and bounded neighborhoods of them

use crate::core::{CodecError, Index, Word, decode};
use std::fmt;
use std::ops::Deref;

/// A word together with its index
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    pub index: Index,
    pub word: Word,
}

impl Entry {
    #[must_use]
    pub const fn new(index: Index, word: Word) -> Self {
        Self { index, word }
    }

    /// Decode the entry at `index`
    ///
    /// # Errors
    /// Returns `CodecError::OutOfRange` if `index` is outside the space.
    pub fn at(index: Index) -> Result<Self, CodecError> {
        let word = decode(&index)?;
        Ok(Self { index, word })
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.index, self.word)
    }
}

/// An ordered run of entries around some pivot
///
/// Windows are built on demand and dropped after use; nothing caches them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Window {
    entries: Vec<Entry>,
}

impl Window {
    #[must_use]
    pub const fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// First entry whose word contains `query`, scanning from position `skip`
    #[must_use]
    pub fn find_from(&self, skip: usize, query: &str) -> Option<&Entry> {
        self.entries
            .iter()
            .skip(skip)
            .find(|entry| entry.word.contains(query))
    }
}

impl Deref for Window {
    type Target = [Entry];

    fn deref(&self) -> &[Entry] {
        &self.entries
    }
}

impl FromIterator<Entry> for Window {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Window {
    type Item = Entry;
    type IntoIter = std::vec::IntoIter<Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Window {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    fn entry(n: u32) -> Entry {
        Entry::at(BigUint::from(n)).unwrap()
    }

    #[test]
    fn entry_at_decodes() {
        let e = entry(13_885_039);
        assert_eq!(e.word.text(), "test");
        assert_eq!(e.to_string(), "13885039 test");
    }

    #[test]
    fn entry_at_out_of_range() {
        let past_end = crate::core::Space::global().total().clone();
        assert_eq!(Entry::at(past_end), Err(CodecError::OutOfRange));
    }

    #[test]
    fn find_from_respects_skip() {
        let window: Window = [13_885_039, 1, 13_885_039].into_iter().map(entry).collect();
        assert_eq!(window.len(), 3);

        let first = window.find_from(0, "test").unwrap();
        assert!(std::ptr::eq(first, &window[0]));

        let skipped = window.find_from(1, "test").unwrap();
        assert!(std::ptr::eq(skipped, &window[2]));

        assert!(window.find_from(3, "test").is_none());
        assert!(window.find_from(0, "zzzz").is_none());
    }
}
