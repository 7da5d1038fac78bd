//! Tokenizing normalized text into indivisible chunks.
//!
//! A chunk is a whitespace run or a non-whitespace run. With the
//! hyphen-aware grammar a non-whitespace run is cut after its last hyphen,
//! so `"well-known"` yields `"well-"` and `"known"`. An em-dash at the start
//! of a run is always a chunk of its own.

use crate::options::WrapOptions;
use crate::text::{EM_DASH, is_whitespace, rune_len, rune_offset};

/// Whether a chunk is made of whitespace or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkKind {
    Word,
    Space,
}

/// An indivisible piece of text with its rune length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    text: &'a str,
    len: usize,
    kind: ChunkKind,
}

impl<'a> Chunk<'a> {
    fn new(text: &'a str, kind: ChunkKind) -> Self {
        Self {
            text,
            len: rune_len(text),
            kind,
        }
    }

    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Rune length.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn kind(&self) -> ChunkKind {
        self.kind
    }

    pub fn is_whitespace(&self) -> bool {
        self.kind == ChunkKind::Space
    }

    /// Splits after `n` runes.
    ///
    /// Returns the head and, if any runes are left, the tail. Both halves keep
    /// the chunk's kind.
    pub fn split_at_rune(self, n: usize) -> (Chunk<'a>, Option<Chunk<'a>>) {
        if n >= self.len {
            return (self, None);
        }

        let offset = rune_offset(self.text, n);
        let head = Chunk {
            text: &self.text[..offset],
            len: n,
            kind: self.kind,
        };
        let tail = Chunk {
            text: &self.text[offset..],
            len: self.len - n,
            kind: self.kind,
        };
        (head, Some(tail))
    }
}

/// Token grammar, fixed for a whole wrap call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Grammar {
    /// Non-whitespace runs are cut after their last hyphen.
    #[default]
    HyphenAware,
    /// Hyphenated words stay whole.
    HyphenAgnostic,
}

impl Grammar {
    pub fn for_options(options: &WrapOptions) -> Self {
        if options.break_on_hyphens {
            Grammar::HyphenAware
        } else {
            Grammar::HyphenAgnostic
        }
    }
}

/// Iterator over the chunks of a text, left to right.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
    grammar: Grammar,
}

/// Splits `text` into chunks using `grammar`.
pub fn tokenize(text: &str, grammar: Grammar) -> Tokens<'_> {
    Tokens {
        rest: text,
        grammar,
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;

        let (end, kind) = if is_whitespace(first) {
            let end = self
                .rest
                .find(|c| !is_whitespace(c))
                .unwrap_or(self.rest.len());
            (end, ChunkKind::Space)
        } else if first == EM_DASH {
            (EM_DASH.len_utf8(), ChunkKind::Word)
        } else {
            let run = self.rest.find(is_whitespace).unwrap_or(self.rest.len());
            let end = match self.grammar {
                // The hyphen must follow at least one character of the run.
                Grammar::HyphenAware => match self.rest[..run].rfind('-') {
                    Some(hyphen) if hyphen > 0 => hyphen + 1,
                    _ => run,
                },
                Grammar::HyphenAgnostic => run,
            };
            (end, ChunkKind::Word)
        };

        let (text, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(Chunk::new(text, kind))
    }
}

/// Read position over a chunk sequence.
///
/// The chunk under the cursor can be replaced in place, which is how the
/// remainder of a split word is handed to the next line. Copying a cursor
/// snapshots its position.
#[derive(Debug, Clone, Copy)]
pub struct ChunkCursor<'c, 'a> {
    chunks: &'c [Chunk<'a>],
    pos: usize,
    pending: Option<Chunk<'a>>,
}

impl<'c, 'a> ChunkCursor<'c, 'a> {
    pub fn new(chunks: &'c [Chunk<'a>]) -> Self {
        Self {
            chunks,
            pos: 0,
            pending: None,
        }
    }

    /// The chunk under the cursor, or its replacement.
    pub fn peek(&self) -> Option<Chunk<'a>> {
        self.pending.or_else(|| self.chunks.get(self.pos).copied())
    }

    /// Moves past the chunk under the cursor.
    pub fn advance(&mut self) {
        if self.pos < self.chunks.len() {
            self.pos += 1;
        }
        self.pending = None;
    }

    /// Substitutes the chunk under the cursor without moving.
    pub fn replace_current(&mut self, chunk: Chunk<'a>) {
        debug_assert!(!self.is_exhausted(), "replace_current past the end");
        self.pending = Some(chunk);
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.chunks.len()
    }

    /// The chunk under the cursor followed by every chunk after it.
    pub fn remaining(&self) -> impl Iterator<Item = Chunk<'a>> + use<'c, 'a> {
        let after = self.chunks.get(self.pos + 1..).unwrap_or_default();
        self.peek().into_iter().chain(after.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(text: &str, grammar: Grammar) -> Vec<&str> {
        tokenize(text, grammar).map(|c| c.as_str()).collect()
    }

    #[test]
    fn test_words_and_spaces_alternate() {
        assert_eq!(
            texts("The quick  brown", Grammar::HyphenAware),
            vec!["The", " ", "quick", "  ", "brown"]
        );
    }

    #[test]
    fn test_leading_and_trailing_space() {
        assert_eq!(texts("  hi ", Grammar::HyphenAware), vec!["  ", "hi", " "]);
    }

    #[test]
    fn test_hyphen_aware_cuts_after_last_hyphen() {
        assert_eq!(
            texts("well-known", Grammar::HyphenAware),
            vec!["well-", "known"]
        );
        assert_eq!(texts("a-b-c", Grammar::HyphenAware), vec!["a-b-", "c"]);
        assert_eq!(texts("trailing-", Grammar::HyphenAware), vec!["trailing-"]);
    }

    #[test]
    fn test_leading_hyphen_is_not_a_break() {
        assert_eq!(texts("-flag", Grammar::HyphenAware), vec!["-flag"]);
        assert_eq!(texts("--", Grammar::HyphenAware), vec!["--"]);
    }

    #[test]
    fn test_hyphen_agnostic_keeps_words_whole() {
        assert_eq!(
            texts("well-known fact", Grammar::HyphenAgnostic),
            vec!["well-known", " ", "fact"]
        );
    }

    #[test]
    fn test_em_dash_starts_its_own_chunk() {
        assert_eq!(
            texts("\u{2014}yes", Grammar::HyphenAgnostic),
            vec!["\u{2014}", "yes"]
        );
        assert_eq!(texts("a-\u{2014}b", Grammar::HyphenAware), vec!["a-", "\u{2014}", "b"]);
        // Inside a run the em-dash is an ordinary character.
        assert_eq!(texts("so\u{2014}so", Grammar::HyphenAware), vec!["so\u{2014}so"]);
    }

    #[test]
    fn test_chunk_kinds_and_lengths() {
        let chunks: Vec<Chunk> = tokenize("héllo  x", Grammar::HyphenAware).collect();
        assert_eq!(chunks[0].len(), 5);
        assert_eq!(chunks[0].kind(), ChunkKind::Word);
        assert!(chunks[1].is_whitespace());
        assert_eq!(chunks[1].len(), 2);
    }

    #[test]
    fn test_split_at_rune() {
        let chunk = tokenize("héllo", Grammar::HyphenAware).next().unwrap();
        let (head, tail) = chunk.split_at_rune(2);
        assert_eq!(head.as_str(), "hé");
        assert_eq!(head.len(), 2);
        let tail = tail.unwrap();
        assert_eq!(tail.as_str(), "llo");
        assert_eq!(tail.len(), 3);

        let (whole, rest) = chunk.split_at_rune(5);
        assert_eq!(whole, chunk);
        assert!(rest.is_none());
    }

    #[test]
    fn test_cursor_replace_current() {
        let chunks: Vec<Chunk> = tokenize("abcdef gh", Grammar::HyphenAware).collect();
        let mut cursor = ChunkCursor::new(&chunks);

        let (_, tail) = cursor.peek().unwrap().split_at_rune(4);
        cursor.replace_current(tail.unwrap());
        assert_eq!(cursor.peek().unwrap().as_str(), "ef");

        let rest: Vec<&str> = cursor.remaining().map(|c| c.as_str()).collect();
        assert_eq!(rest, vec!["ef", " ", "gh"]);

        cursor.advance();
        assert_eq!(cursor.peek().unwrap().as_str(), " ");
    }

    #[test]
    fn test_cursor_copy_is_a_snapshot() {
        let chunks: Vec<Chunk> = tokenize("a b", Grammar::HyphenAware).collect();
        let mut cursor = ChunkCursor::new(&chunks);
        let snapshot = cursor;
        cursor.advance();
        cursor.advance();
        cursor.advance();
        assert!(cursor.is_exhausted());
        assert!(cursor.peek().is_none());
        assert_eq!(snapshot.peek().unwrap().as_str(), "a");
    }
}
