//! Formatting utilities for terminal output

use crate::core::Index;

/// Decimal digits of `index` grouped in threes with `_`
///
/// Indices in the upper buckets run past sixty digits; grouping keeps them
/// readable without changing how they parse back.
#[must_use]
pub fn group_digits(index: &Index) -> String {
    let digits = index.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('_');
        }
        grouped.push(c);
    }
    grouped
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how far through the whole space a position lies
#[must_use]
pub fn position_bar(fraction: f64, width: usize) -> String {
    create_progress_bar(fraction.clamp(0.0, 1.0), 1.0, width)
}

/// Split `word` around the first occurrence of `query`
///
/// Returns `(before, matched, after)`, or `None` when `query` is empty or
/// absent.
#[must_use]
pub fn split_match<'a>(word: &'a str, query: &str) -> Option<(&'a str, &'a str, &'a str)> {
    if query.is_empty() {
        return None;
    }
    let start = word.find(query)?;
    let end = start + query.len();
    Some((&word[..start], &word[start..end], &word[end..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_digits_small_values() {
        assert_eq!(group_digits(&Index::from(0u32)), "0");
        assert_eq!(group_digits(&Index::from(999u32)), "999");
        assert_eq!(group_digits(&Index::from(8100u32)), "8_100");
    }

    #[test]
    fn group_digits_parses_back() {
        let index = Index::from(13_885_039u32);
        let grouped = group_digits(&index);
        assert_eq!(grouped, "13_885_039");
        assert_eq!(crate::core::parse_index(&grouped).unwrap(), index);
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn position_bar_clamps() {
        assert_eq!(position_bar(2.0, 4), "████");
        assert_eq!(position_bar(-1.0, 4), "░░░░");
    }

    #[test]
    fn split_match_finds_first_occurrence() {
        assert_eq!(split_match("xtestx", "test"), Some(("x", "test", "x")));
        assert_eq!(split_match("aaaa", "aa"), Some(("", "aa", "aa")));
        assert_eq!(split_match("aaaa", "b"), None);
        assert_eq!(split_match("aaaa", ""), None);
    }
}
