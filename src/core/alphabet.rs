//! The fixed 90-symbol digit alphabet
//!
//! Position in [`Alphabet::SYMBOLS`] is a symbol's numeric weight. Every symbol
//! is ASCII, so weight lookup is a single table read.

/// Ordered digit alphabet of the numeral system
///
/// Lowercase letters, uppercase letters, digits and then the 28 punctuation
/// symbols commonly accepted in passwords.
pub struct Alphabet;

/// Sentinel value in the weight table for bytes outside the alphabet
const NOT_A_SYMBOL: u8 = u8::MAX;

const fn build_weights() -> [u8; 128] {
    let mut table = [NOT_A_SYMBOL; 128];
    let symbols = Alphabet::SYMBOLS;
    let mut i = 0;
    while i < symbols.len() {
        table[symbols[i] as usize] = i as u8;
        i += 1;
    }
    table
}

const WEIGHTS: [u8; 128] = build_weights();

impl Alphabet {
    /// Symbols in weight order
    pub const SYMBOLS: &'static [u8; 90] =
        b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()_+-=[]{}|;:,.<>?~`";

    /// Radix of the numeral system
    pub const RADIX: u32 = 90;

    /// Symbol with weight zero, also used as padding filler
    pub const FIRST: char = 'a';

    /// Symbol with the highest weight
    pub const LAST: char = '`';

    /// Weight of a symbol, or `None` if `c` is not in the alphabet
    ///
    /// # Examples
    /// ```
    /// use wordspace::core::Alphabet;
    ///
    /// assert_eq!(Alphabet::weight('a'), Some(0));
    /// assert_eq!(Alphabet::weight('A'), Some(26));
    /// assert_eq!(Alphabet::weight('`'), Some(89));
    /// assert_eq!(Alphabet::weight(' '), None);
    /// ```
    #[inline]
    #[must_use]
    pub const fn weight(c: char) -> Option<u8> {
        if !c.is_ascii() {
            return None;
        }
        match WEIGHTS[c as usize] {
            NOT_A_SYMBOL => None,
            w => Some(w),
        }
    }

    /// Symbol for a digit weight
    ///
    /// # Panics
    /// Panics if `weight >= 90`
    #[inline]
    #[must_use]
    pub const fn symbol(weight: u8) -> char {
        Self::SYMBOLS[weight as usize] as char
    }

    #[inline]
    #[must_use]
    pub const fn contains(c: char) -> bool {
        Self::weight(c).is_some()
    }

    /// First character of `text` that is not in the alphabet
    #[must_use]
    pub fn first_foreign(text: &str) -> Option<char> {
        text.chars().find(|&c| !Self::contains(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_are_distinct() {
        let mut seen = [false; 128];
        for &b in Alphabet::SYMBOLS {
            assert!(b.is_ascii(), "symbol {b} is not ASCII");
            assert!(!seen[b as usize], "duplicate symbol {}", b as char);
            seen[b as usize] = true;
        }
    }

    #[test]
    fn weight_and_symbol_agree() {
        for w in 0..90u8 {
            assert_eq!(Alphabet::weight(Alphabet::symbol(w)), Some(w));
        }
    }

    #[test]
    fn first_and_last() {
        assert_eq!(Alphabet::symbol(0), Alphabet::FIRST);
        assert_eq!(Alphabet::symbol(89), Alphabet::LAST);
    }

    #[test]
    fn rejects_foreign_characters() {
        assert!(!Alphabet::contains(' '));
        assert!(!Alphabet::contains('"'));
        assert!(!Alphabet::contains('\''));
        assert!(!Alphabet::contains('\\'));
        assert!(!Alphabet::contains('/'));
        assert!(!Alphabet::contains('é'));
        assert!(!Alphabet::contains('\u{0}'));
    }

    #[test]
    fn first_foreign_finds_offender() {
        assert_eq!(Alphabet::first_foreign("abc"), None);
        assert_eq!(Alphabet::first_foreign("ab c/"), Some(' '));
        assert_eq!(Alphabet::first_foreign("pässword"), Some('ä'));
    }
}
