//! Exact index ↔ word conversion
//!
//! An index is split into a length bucket and a position inside that bucket.
//! The position is written as a fixed-width base-90 numeral, most significant
//! digit first, left-padded with the zero-weight symbol to the bucket length.

use super::alphabet::Alphabet;
use super::error::{CodecError, InvalidInput};
use super::space::{Index, Space};
use super::word::Word;
use num_bigint::BigUint;
use std::sync::LazyLock;

/// Text returned for the redacted index
pub const SENTINEL_WORD: &str = "REDACTED_FOR_PRIVACY";

/// The one index whose general decoding is withheld
///
/// `decode` returns [`SENTINEL_WORD`] here, so the codec is not injective at
/// this point and `encode(SENTINEL_WORD)` is rejected. The placeholder also
/// decodes from its own natural position, [`PLACEHOLDER_INDEX`], which is
/// the second index that does not survive `encode(decode(i))`.
pub static SENTINEL_INDEX: LazyLock<Index> = LazyLock::new(|| {
    BigUint::parse_bytes(
        b"253678755115861948496982997836108171238341867485760675695",
        10,
    )
    .unwrap_or_default()
});

/// Natural index of [`SENTINEL_WORD`] in the length-20 bucket
///
/// Decoding it yields the placeholder like any other word, but encoding the
/// placeholder is rejected, so callers holding a decoded placeholder have to
/// keep the index they decoded it from.
pub static PLACEHOLDER_INDEX: LazyLock<Index> =
    LazyLock::new(|| natural_index(SENTINEL_WORD).unwrap_or_default());

/// Decode an index into its word
///
/// # Errors
/// Returns `CodecError::OutOfRange` if `index` is not below the size of the space.
///
/// # Examples
/// ```
/// use num_bigint::BigUint;
/// use wordspace::core::decode;
///
/// assert_eq!(decode(&BigUint::from(0u32)).unwrap().text(), "aaaa");
/// assert_eq!(decode(&BigUint::from(1u32)).unwrap().text(), "aaab");
/// ```
pub fn decode(index: &Index) -> Result<Word, CodecError> {
    if *index == *SENTINEL_INDEX {
        return Ok(Word::from_trusted(SENTINEL_WORD.to_string()));
    }

    let space = Space::global();
    let length = space.length_of(index).ok_or(CodecError::OutOfRange)?;
    let position = index - space.offset(length);

    let digits = position.to_radix_be(Alphabet::RADIX);
    let mut text = String::with_capacity(length);
    // to_radix_be yields [0] for zero, never more digits than the bucket holds
    for _ in digits.len()..length {
        text.push(Alphabet::FIRST);
    }
    text.extend(digits.iter().map(|&d| Alphabet::symbol(d)));

    Ok(Word::from_trusted(text))
}

/// Encode a word into its index
///
/// # Errors
/// Returns `CodecError::InvalidInput` if:
/// - The text is empty or its length is outside 4-32
/// - Any character is not in the alphabet
/// - The text is the redaction placeholder
///
/// # Examples
/// ```
/// use num_bigint::BigUint;
/// use wordspace::core::encode;
///
/// assert_eq!(encode("aaaa").unwrap(), BigUint::from(0u32));
/// assert_eq!(encode("test").unwrap(), BigUint::from(13_885_039u32));
/// assert!(encode("abc").is_err());
/// ```
pub fn encode(word: &str) -> Result<Index, CodecError> {
    let word = Word::new(word)?;
    encode_word(&word)
}

/// Encode an already validated word
///
/// # Errors
/// Returns `CodecError::InvalidInput` only for the redaction placeholder.
pub fn encode_word(word: &Word) -> Result<Index, CodecError> {
    if word.text() == SENTINEL_WORD {
        return Err(InvalidInput::Sentinel.into());
    }
    natural_index(word.text()).map_err(CodecError::from)
}

/// Bucket offset plus the base-90 value of `text`, with no sentinel guard
///
/// `text` must already have a valid length.
fn natural_index(text: &str) -> Result<Index, InvalidInput> {
    // Horner's rule over the digit weights
    let mut value = BigUint::default();
    for c in text.chars() {
        let weight = Alphabet::weight(c).ok_or(InvalidInput::Symbol(c))?;
        value *= Alphabet::RADIX;
        value += u32::from(weight);
    }

    Ok(Space::global().offset(text.len()) + value)
}

/// Parse a decimal index, checking it lies inside the space
///
/// # Errors
/// Returns `InvalidInput::NotANumber` for anything other than ASCII digits
/// (surrounding whitespace and `_` separators are allowed), and
/// `CodecError::OutOfRange` for values at or above the size of the space.
pub fn parse_index(text: &str) -> Result<Index, CodecError> {
    let digits: String = text.trim().chars().filter(|&c| c != '_').collect();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvalidInput::NotANumber.into());
    }
    let index = BigUint::parse_bytes(digits.as_bytes(), 10)
        .ok_or(InvalidInput::NotANumber)?;
    if !Space::global().contains(&index) {
        return Err(CodecError::OutOfRange);
    }
    Ok(index)
}
