//! Whitespace classification and rune measurement.
//!
//! Widths are counted in `char`s (Unicode scalar values), not display
//! columns or grapheme clusters.

/// The plain space, the only whitespace kept by whitespace replacement.
pub const SPACE: char = ' ';

/// Em-dash, always a chunk of its own when it starts a word.
pub const EM_DASH: char = '\u{2014}';

/// Returns true for the whitespace characters the wrapper recognizes:
/// space, tab, newline, vertical tab, form feed and carriage return.
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// Returns true if `s` is empty or made only of whitespace.
pub fn is_blank(s: &str) -> bool {
    s.chars().all(is_whitespace)
}

/// Length of `s` in runes.
pub fn rune_len(s: &str) -> usize {
    s.chars().count()
}

pub fn lstrip(s: &str) -> &str {
    s.trim_start_matches(is_whitespace)
}

pub fn rstrip(s: &str) -> &str {
    s.trim_end_matches(is_whitespace)
}

/// Leading whitespace of `s`.
pub fn leading_whitespace(s: &str) -> &str {
    &s[..s.len() - lstrip(s).len()]
}

/// Byte offset of the `n`th rune in `s`, or `s.len()` if `s` is shorter.
pub fn rune_offset(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(i, _)| i)
}
