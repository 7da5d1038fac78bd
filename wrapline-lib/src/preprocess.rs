//! Text normalization applied before tokenizing.

use std::borrow::Cow;

use crate::options::WrapOptions;
use crate::text::{SPACE, is_whitespace};

/// Runs the enabled normalization steps in order: tab expansion,
/// whitespace replacement, sentence-ending fix.
///
/// `tab` is the string every tab expands to. Text that needs no change is
/// returned borrowed.
pub fn preprocess<'a>(text: &'a str, options: &WrapOptions, tab: &str) -> Cow<'a, str> {
    let mut text = Cow::Borrowed(text);

    if options.expand_tabs && text.contains('\t') {
        text = Cow::Owned(text.replace('\t', tab));
    }

    if options.replace_whitespace && text.contains(is_other_whitespace) {
        text = Cow::Owned(text.replace(is_other_whitespace, " "));
    }

    if options.fix_sentence_endings {
        let fixed = match fix_sentence_endings(&text) {
            Cow::Owned(fixed) => Some(fixed),
            Cow::Borrowed(_) => None,
        };
        if let Some(fixed) = fixed {
            text = Cow::Owned(fixed);
        }
    }

    text
}

/// Whitespace other than the plain space.
fn is_other_whitespace(c: char) -> bool {
    c != SPACE && is_whitespace(c)
}

/// Puts exactly two spaces after every sentence ending.
///
/// A sentence ending is a non-whitespace character, one of `.` `!` `?`, an
/// optional `'` or `"`, then one or more spaces. "Mr. Rogers" matches too.
pub fn fix_sentence_endings(text: &str) -> Cow<'_, str> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let byte_at = |k: usize| chars.get(k).map_or(text.len(), |&(b, _)| b);

    let mut out: Option<String> = None;
    let mut copied = 0;
    let mut i = 0;

    while i < chars.len() {
        let Some((end, resume)) = sentence_ending_at(&chars, i) else {
            i += 1;
            continue;
        };

        let buf = out.get_or_insert_with(|| String::with_capacity(text.len() + 16));
        buf.push_str(&text[copied..byte_at(end)]);
        buf.push_str("  ");
        copied = byte_at(resume);
        i = resume;
    }

    match out {
        Some(mut buf) => {
            buf.push_str(&text[copied..]);
            Cow::Owned(buf)
        }
        None => Cow::Borrowed(text),
    }
}

/// Matches a sentence ending starting at char index `i`.
///
/// Returns the index where the kept text ends (first space) and the index
/// just past the run of spaces.
fn sentence_ending_at(chars: &[(usize, char)], i: usize) -> Option<(usize, usize)> {
    let at = |k: usize| chars.get(k).map(|&(_, c)| c);

    if is_whitespace(at(i)?) || !matches!(at(i + 1)?, '.' | '!' | '?') {
        return None;
    }

    let mut end = i + 2;
    if matches!(at(end), Some('\'' | '"')) && at(end + 1) == Some(SPACE) {
        end += 1;
    }
    if at(end) != Some(SPACE) {
        return None;
    }

    let mut resume = end + 1;
    while at(resume) == Some(SPACE) {
        resume += 1;
    }
    Some((end, resume))
}

/// Collapses every whitespace run to a single space and trims both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split(is_whitespace)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
