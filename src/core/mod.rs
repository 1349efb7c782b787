//! Core domain types for the word space
//!
//! The alphabet, the length-bucketed layout of the space, and the exact
//! codec between arbitrary-precision indices and words.

mod alphabet;
mod codec;
mod error;
mod space;
mod word;

pub use alphabet::Alphabet;
pub use codec::{
    PLACEHOLDER_INDEX, SENTINEL_INDEX, SENTINEL_WORD, decode, encode, encode_word, parse_index,
};
pub use error::{CodecError, InvalidInput};
pub use space::{BUCKETS, Index, MAX_LENGTH, MIN_LENGTH, Space};
pub use word::Word;
