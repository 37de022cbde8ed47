//! Typographic normalization
//!
//! Documents pick up typographic variants that the captured annotation did
//! not have (or the other way round): auto-correct curls quotes, copy-paste
//! from other tools brings full-width colons and non-breaking spaces. Exact
//! search fails on all of them. [`normalize`] maps each variant to its ASCII
//! counterpart.
//!
//! Every substitution replaces one `char` with one `char`. Case, whitespace
//! structure and every character outside the table are left untouched, so
//! character offsets computed on normalized text line up with the source.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Canonical replacement for a single character, if it has one
#[inline]
pub fn canonical_char(ch: char) -> Option<char> {
    match ch {
        // Single quotes and apostrophes
        '\u{2018}' | // Left single quotation mark
        '\u{2019}' | // Right single quotation mark
        '\u{201A}' | // Single low-9 quotation mark
        '\u{201B}' | // Single high-reversed-9 quotation mark
        '\u{02BC}'   // Modifier letter apostrophe
        => Some('\''),

        // Double quotes
        '\u{201C}' | // Left double quotation mark
        '\u{201D}' | // Right double quotation mark
        '\u{201E}' | // Double low-9 quotation mark
        '\u{201F}'   // Double high-reversed-9 quotation mark
        => Some('"'),

        // Semicolon variants
        '\u{037E}' | // Greek question mark (renders as a semicolon)
        '\u{FE54}' | // Small semicolon
        '\u{FF1B}'   // Full-width semicolon
        => Some(';'),

        // Colon variants
        '\u{2236}' | // Ratio
        '\u{A789}' | // Modifier letter colon
        '\u{FE55}' | // Small colon
        '\u{FF1A}'   // Full-width colon
        => Some(':'),

        // Non-breaking spaces
        '\u{00A0}' | // No-break space
        '\u{2007}' | // Figure space
        '\u{202F}'   // Narrow no-break space
        => Some(' '),

        _ => None,
    }
}

/// Map typographic variants in `text` to their ASCII equivalents
///
/// Idempotent: every replacement is ASCII and ASCII is never substituted.
pub fn normalize(text: &str) -> String {
    text.chars()
        .map(|ch| canonical_char(ch).unwrap_or(ch))
        .collect()
}

/// Whether [`normalize`] would change `text`
#[inline]
pub fn needs_normalization(text: &str) -> bool {
    text.chars().any(|ch| canonical_char(ch).is_some())
}

/// Length of `text` in characters
///
/// Host query ceilings are expressed in characters, not bytes.
#[inline]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Longest prefix of `text` holding at most `max_chars` characters
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Whether `ch` is punctuation for punctuation-insensitive search
#[inline]
pub fn is_punctuation(ch: char) -> bool {
    matches!(
        get_general_category(ch),
        GeneralCategory::OtherPunctuation
            | GeneralCategory::OpenPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::InitialPunctuation
            | GeneralCategory::FinalPunctuation
            | GeneralCategory::ConnectorPunctuation
            | GeneralCategory::DashPunctuation
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curly_quotes_become_straight() {
        assert_eq!(
            normalize("\u{201C}Goods\u{201D} means the Supplier\u{2019}s products"),
            "\"Goods\" means the Supplier's products"
        );
    }

    #[test]
    fn test_colon_semicolon_and_spaces() {
        assert_eq!(normalize("Term\u{FF1A} one year\u{FF1B}"), "Term: one year;");
        assert_eq!(normalize("10\u{00A0}days"), "10 days");
        assert_eq!(normalize("a\u{202F}b\u{2007}c"), "a b c");
    }

    #[test]
    fn test_plain_ascii_is_untouched() {
        let text = "Plain ASCII: \"quoted\", it's fine; CASE kept.\n\tTabs too.";
        assert_eq!(normalize(text), text);
        assert!(!needs_normalization(text));
    }

    #[test]
    fn test_needs_normalization() {
        assert!(needs_normalization("don\u{2019}t"));
        assert!(!needs_normalization("don't"));
        assert!(!needs_normalization(""));
    }

    #[test]
    fn test_char_count_is_preserved() {
        let text = "\u{2018}x\u{2019} \u{201C}y\u{201D}\u{00A0}z\u{FF1A}";
        assert_eq!(char_len(&normalize(text)), char_len(text));
        // Byte length shrinks because every replacement is ASCII
        assert!(normalize(text).len() < text.len());
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("abc", 3), "abc");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("", 5), "");
        // Multi-byte characters are never split
        assert_eq!(truncate_chars("\u{201C}d\u{00E9}j\u{00E0}", 3), "\u{201C}d\u{00E9}");
    }

    #[test]
    fn test_is_punctuation() {
        for ch in ['.', ',', '\'', '"', '-', '\u{2013}', '\u{2014}', '\u{2019}', '(', '!'] {
            assert!(is_punctuation(ch), "{ch:?} should be punctuation");
        }
        for ch in ['a', 'Z', '7', ' ', '\n', '\u{00E9}'] {
            assert!(!is_punctuation(ch), "{ch:?} should not be punctuation");
        }
    }
}
