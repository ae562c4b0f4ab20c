//! Invisible formatting characters and their removal.
//!
//! WhatsApp sprinkles left-to-right marks and similar zero-width characters
//! through its exports: before the `[date, time]` header of attachment lines,
//! right after the sender's colon, and inside attachment markers. The same set
//! of characters is used by every stage, through [`is_invisible`] for plain
//! string handling and [`INVISIBLE_CLASS`] inside regular expressions.

/// Inclusive code point ranges treated as invisible.
///
/// - U+200B..U+200F zero-width space/joiners, LRM, RLM
/// - U+202A..U+202E directional embeddings and overrides
/// - U+2060..U+206F word joiner and invisible operators
/// - U+FEFF byte-order mark
/// - U+00AD soft hyphen
/// - U+061C Arabic letter mark
/// - U+180E Mongolian vowel separator
pub const INVISIBLE_RANGES: &[(char, char)] = &[
    ('\u{200B}', '\u{200F}'),
    ('\u{202A}', '\u{202E}'),
    ('\u{2060}', '\u{206F}'),
    ('\u{FEFF}', '\u{FEFF}'),
    ('\u{00AD}', '\u{00AD}'),
    ('\u{061C}', '\u{061C}'),
    ('\u{180E}', '\u{180E}'),
];

/// [`INVISIBLE_RANGES`] as the body of a regex character class.
pub const INVISIBLE_CLASS: &str =
    r"\x{200B}-\x{200F}\x{202A}-\x{202E}\x{2060}-\x{206F}\x{FEFF}\x{00AD}\x{061C}\x{180E}";

/// Returns `true` if `c` is an invisible formatting character.
pub fn is_invisible(c: char) -> bool {
    INVISIBLE_RANGES
        .iter()
        .any(|&(start, end)| (start..=end).contains(&c))
}

/// Strips the leading run of invisible characters from a line.
///
/// Invisible characters later in the line are kept.
///
/// ```rust
/// use wa_export::parsing::sanitize::strip_leading_invisible;
///
/// assert_eq!(strip_leading_invisible("\u{200E}[01/02/2024"), "[01/02/2024");
/// assert_eq!(strip_leading_invisible("a\u{200E}b"), "a\u{200E}b");
/// ```
pub fn strip_leading_invisible(line: &str) -> &str {
    line.trim_start_matches(is_invisible)
}

/// Removes every invisible character from `text`.
pub fn strip_invisible(text: &str) -> String {
    text.chars().filter(|&c| !is_invisible(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_strip_leading_run_only() {
        assert_eq!(
            strip_leading_invisible("\u{200E}\u{FEFF}\u{202A}hello\u{200E}"),
            "hello\u{200E}"
        );
    }

    #[test]
    fn test_strip_leading_empty_and_plain() {
        assert_eq!(strip_leading_invisible(""), "");
        assert_eq!(strip_leading_invisible("\u{200B}\u{200B}"), "");
        assert_eq!(strip_leading_invisible("plain"), "plain");
        // ordinary whitespace is not invisible
        assert_eq!(strip_leading_invisible("  x"), "  x");
    }

    #[test]
    fn test_strip_invisible_everywhere() {
        assert_eq!(
            strip_invisible("\u{200E}<attached: \u{2068}a.jpg\u{2069}>\u{00AD}"),
            "<attached: a.jpg>"
        );
    }

    #[test]
    fn test_each_range_boundary_is_invisible() {
        for &(start, end) in INVISIBLE_RANGES {
            assert!(is_invisible(start));
            assert!(is_invisible(end));
        }
        assert!(!is_invisible('\u{200A}'));
        assert!(!is_invisible('\u{2070}'));
        assert!(!is_invisible('a'));
    }

    #[test]
    fn test_regex_class_matches_char_predicate() {
        let class = Regex::new(&format!("^[{INVISIBLE_CLASS}]$")).unwrap();
        for &(start, end) in INVISIBLE_RANGES {
            for c in start..=end {
                assert!(class.is_match(&c.to_string()), "U+{:04X}", c as u32);
            }
        }
        for c in ['\u{200A}', '\u{2029}', '\u{2070}', 'x', ' '] {
            assert!(!class.is_match(&c.to_string()), "U+{:04X}", c as u32);
        }
    }
}
