//! Greedy line packing.
//!
//! Chunks are appended to a line while the line stays strictly shorter than
//! its effective width (`width - indent`, minus the placeholder on a
//! truncated last line). A chunk longer than a whole line is split, forced
//! onto an empty line, or deferred depending on `break_long_words`.

use crate::chunk::{Chunk, ChunkCursor};
use crate::options::WrapOptions;
use crate::text::{lstrip, rstrip, rune_len};

/// One output row under construction, before its indent is prepended.
#[derive(Debug, Default)]
pub struct Line<'a> {
    chunks: Vec<Chunk<'a>>,
    len: usize,
}

impl<'a> Line<'a> {
    pub fn push(&mut self, chunk: Chunk<'a>) {
        self.len += chunk.len();
        self.chunks.push(chunk);
    }

    pub fn pop(&mut self) -> Option<Chunk<'a>> {
        let chunk = self.chunks.pop()?;
        self.len -= chunk.len();
        Some(chunk)
    }

    pub fn last(&self) -> Option<&Chunk<'a>> {
        self.chunks.last()
    }

    /// Rune length of the content.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Renders `indent` followed by the chunks and `suffix`.
    pub fn render(&self, indent: &str, suffix: &str) -> String {
        let bytes = self.chunks.iter().map(|c| c.as_str().len()).sum::<usize>();
        let mut out = String::with_capacity(indent.len() + bytes + suffix.len());
        out.push_str(indent);
        for chunk in &self.chunks {
            out.push_str(chunk.as_str());
        }
        out.push_str(suffix);
        out
    }
}

/// Packs `chunks` into rendered, indented lines.
///
/// `options` must already be validated.
pub fn pack(chunks: &[Chunk<'_>], options: &WrapOptions) -> Vec<String> {
    let mut cursor = ChunkCursor::new(chunks);
    let mut lines: Vec<String> = Vec::new();

    while !cursor.is_exhausted() {
        if !lines.is_empty()
            && options.drop_whitespace
            && cursor.peek().is_some_and(|c| c.is_whitespace())
        {
            cursor.advance();
        }

        let indent = if lines.is_empty() {
            options.initial_indent.as_str()
        } else {
            options.subsequent_indent.as_str()
        };
        let width = options.width as isize - rune_len(indent) as isize;

        if options.max_lines > 0 && lines.len() + 1 == options.max_lines {
            pack_last_line(&mut cursor, indent, width, options, &mut lines);
            break;
        }

        let line = fill_line(&mut cursor, width, options, true);
        if !line.is_empty() {
            log::trace!("line {}: {} runes", lines.len() + 1, line.len());
            lines.push(line.render(indent, ""));
        }
    }

    // A single-line budget always yields a line, even for blank input.
    if options.max_lines == 1 && lines.is_empty() {
        log::debug!("no content for the only line, emitting the placeholder");
        let placeholder = lstrip(&options.placeholder);
        lines.push(format!("{}{placeholder}", options.initial_indent));
    }

    lines
}

/// Packs the last line permitted by `max_lines`.
///
/// If the rest of the text fits at full width it becomes an ordinary line.
/// Otherwise the line is packed with room for the placeholder and truncated.
fn pack_last_line(
    cursor: &mut ChunkCursor<'_, '_>,
    indent: &str,
    width: isize,
    options: &WrapOptions,
    lines: &mut Vec<String>,
) {
    let mut attempt = *cursor;
    let line = fill_line(&mut attempt, width, options, true);
    if !has_content(&attempt, options) {
        if !line.is_empty() {
            lines.push(line.render(indent, ""));
        }
        return;
    }

    let reserved = rune_len(&options.placeholder) as isize;
    let line = fill_line(cursor, width - reserved, options, false);
    log::debug!(
        "truncating at {} lines, {} runes kept on the last line",
        options.max_lines,
        line.len()
    );
    truncate(line, indent, width, options, lines);
}

/// Fills one line from `cursor` and applies the long-chunk and
/// trailing-whitespace policies.
///
/// `force_long` allows an over-long chunk onto an empty line when words may
/// not be broken.
fn fill_line<'a>(
    cursor: &mut ChunkCursor<'_, 'a>,
    width: isize,
    options: &WrapOptions,
    force_long: bool,
) -> Line<'a> {
    let mut line = Line::default();

    while let Some(chunk) = cursor.peek() {
        if (line.len() + chunk.len()) as isize >= width {
            break;
        }
        line.push(chunk);
        cursor.advance();
    }

    if let Some(next) = cursor.peek() {
        if next.len() as isize > width {
            if options.break_long_words {
                let room = (width - line.len() as isize).max(1) as usize;
                let (head, tail) = next.split_at_rune(room);
                log::trace!("splitting {:?} after {} runes", next.as_str(), room);
                line.push(head);
                match tail {
                    Some(tail) => cursor.replace_current(tail),
                    None => cursor.advance(),
                }
            } else if line.is_empty() && force_long {
                line.push(next);
                cursor.advance();
            }
        } else if line.is_empty() {
            // Exactly as wide as the line: nothing else could ever fit.
            line.push(next);
            cursor.advance();
        }
    }

    if options.drop_whitespace && line.last().is_some_and(|c| c.is_whitespace()) {
        line.pop();
    }

    line
}

/// True if the cursor still holds text that would produce output.
fn has_content(cursor: &ChunkCursor<'_, '_>, options: &WrapOptions) -> bool {
    cursor
        .remaining()
        .any(|c| !(options.drop_whitespace && c.is_whitespace()))
}

/// Ends the output with the placeholder.
///
/// Chunks are dropped from the end of `line` until it ends in a word with
/// room for the placeholder. An exhausted line hands the placeholder to the
/// previous line when that still fits in `options.width`, or else emits the
/// left-stripped placeholder on a line of its own.
fn truncate(
    mut line: Line<'_>,
    indent: &str,
    width: isize,
    options: &WrapOptions,
    lines: &mut Vec<String>,
) {
    let placeholder = options.placeholder.as_str();
    let placeholder_len = rune_len(placeholder);

    while let Some(last) = line.last() {
        if !last.is_whitespace() && (line.len() + placeholder_len) as isize <= width {
            lines.push(line.render(indent, placeholder));
            return;
        }
        line.pop();
    }

    if let Some(prev) = lines.last_mut() {
        let kept = rstrip(prev);
        if rune_len(kept) + placeholder_len <= options.width {
            let merged = format!("{kept}{placeholder}");
            *prev = merged;
            return;
        }
    }

    lines.push(format!("{indent}{}", lstrip(placeholder)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunk::{Grammar, tokenize};

    fn chunks(text: &str) -> Vec<Chunk<'_>> {
        tokenize(text, Grammar::HyphenAware).collect()
    }

    #[test]
    fn test_line_push_pop_tracks_length() {
        let chunks = chunks("ab  cde");
        let mut line = Line::default();
        for chunk in &chunks {
            line.push(*chunk);
        }
        assert_eq!(line.len(), 7);
        line.pop();
        assert_eq!(line.len(), 4);
        assert_eq!(line.render("> ", "!"), "> ab  !");
    }

    #[test]
    fn test_strict_fill_defers_exact_fit() {
        let chunks = chunks("abcd efgh");
        let options = WrapOptions::default();
        let mut cursor = ChunkCursor::new(&chunks);
        // "abcd " is 5 runes, "efgh" would reach 9 which is the width.
        let line = fill_line(&mut cursor, 9, &options, true);
        assert_eq!(line.render("", ""), "abcd");
        assert_eq!(cursor.peek().unwrap().as_str(), "efgh");
    }

    #[test]
    fn test_exact_fit_on_empty_line_is_taken() {
        let chunks = chunks("abcde");
        let options = WrapOptions::default();
        let mut cursor = ChunkCursor::new(&chunks);
        let line = fill_line(&mut cursor, 5, &options, true);
        assert_eq!(line.render("", ""), "abcde");
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn test_split_leaves_tail_under_cursor() {
        let chunks = chunks("ab abcdefgh");
        let options = WrapOptions::default();
        let mut cursor = ChunkCursor::new(&chunks);
        let line = fill_line(&mut cursor, 6, &options, true);
        assert_eq!(line.render("", ""), "ab abc");
        assert_eq!(cursor.peek().unwrap().as_str(), "defgh");
    }

    #[test]
    fn test_non_positive_width_splits_one_rune() {
        let chunks = chunks("abc");
        let options = WrapOptions::default();
        let mut cursor = ChunkCursor::new(&chunks);
        let line = fill_line(&mut cursor, -2, &options, true);
        assert_eq!(line.render("", ""), "a");
        assert_eq!(cursor.peek().unwrap().as_str(), "bc");
    }

    #[test]
    fn test_unbreakable_chunk_waits_for_empty_line() {
        let chunks = chunks("ab abcdefgh");
        let options = WrapOptions::default().with_break_long_words(false);
        let mut cursor = ChunkCursor::new(&chunks);

        let first = fill_line(&mut cursor, 6, &options, true);
        assert_eq!(first.render("", ""), "ab");

        let second = fill_line(&mut cursor, 6, &options, true);
        assert_eq!(second.render("", ""), "abcdefgh");
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn test_single_line_budget_on_blank_input() {
        let options = WrapOptions::default()
            .with_width(10)
            .with_max_lines(1)
            .with_initial_indent("> ");
        assert_eq!(pack(&chunks("   "), &options), vec!["> [...]"]);
        assert_eq!(pack(&[], &options), vec!["> [...]"]);
        assert!(pack(&[], &options.clone().with_max_lines(2)).is_empty());
    }

    #[test]
    fn test_truncate_merges_into_previous_line() {
        let mut lines = vec!["aa ".to_string()];
        let options = WrapOptions::default().with_width(8);
        truncate(Line::default(), "", 2, &options, &mut lines);
        assert_eq!(lines, vec!["aa [...]"]);
    }

    #[test]
    fn test_truncate_falls_back_to_bare_placeholder() {
        let mut lines = vec!["hello".to_string()];
        let options = WrapOptions::default().with_width(6);
        let chunks = chunks("x");
        let mut line = Line::default();
        line.push(chunks[0]);
        truncate(line, "", 6, &options, &mut lines);
        assert_eq!(lines, vec!["hello", "[...]"]);
    }
}
