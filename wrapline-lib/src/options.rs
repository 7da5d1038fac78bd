//! Wrapping configuration

use serde::{Deserialize, Serialize};

use crate::error::WrapError;
use crate::text::{lstrip, rune_len};

/// Wrapping policy shared by [`wrap`](crate::wrap), [`fill`](crate::fill) and
/// [`shorten`](crate::shorten).
///
/// A plain value with named fields. Construction never fails; the values are
/// checked by [`validate`](Self::validate) when a wrap call starts.
///
/// # Example
///
/// ```
/// use wrapline_lib::WrapOptions;
///
/// let options = WrapOptions::new()
///     .with_width(40)
///     .with_subsequent_indent("    ")
///     .with_max_lines(3);
/// assert_eq!(options.width, 40);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WrapOptions {
    /// Target line width in runes, indent included.
    ///
    /// Default: 70
    pub width: usize,

    /// Replace every tab with `tab_size` spaces before wrapping.
    ///
    /// Default: true
    pub expand_tabs: bool,

    /// Spaces per tab when `expand_tabs` is set.
    ///
    /// Default: 8
    pub tab_size: usize,

    /// Replace tab, newline, vertical tab, form feed and carriage return with a space.
    ///
    /// Default: true
    pub replace_whitespace: bool,

    /// Drop whitespace at the start and end of wrapped lines.
    ///
    /// Whitespace at the very beginning of the text is kept when the first
    /// line has content. Default: true
    pub drop_whitespace: bool,

    /// Prefix of the first output line.
    ///
    /// Default: ""
    pub initial_indent: String,

    /// Prefix of every output line after the first.
    ///
    /// Default: ""
    pub subsequent_indent: String,

    /// Put two spaces after sentence-ending punctuation.
    ///
    /// Heuristic: abbreviations such as "Mr. Rogers" also match. Default: false
    pub fix_sentence_endings: bool,

    /// Split words that are wider than a line.
    ///
    /// Default: true
    pub break_long_words: bool,

    /// Allow line breaks after hyphens inside words.
    ///
    /// Default: true
    pub break_on_hyphens: bool,

    /// Maximum number of output lines, 0 for no limit.
    ///
    /// Default: 0
    pub max_lines: usize,

    /// Marker appended to the last line when text is truncated.
    ///
    /// Default: " [...]"
    pub placeholder: String,
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self {
            width: 70,
            expand_tabs: true,
            tab_size: 8,
            replace_whitespace: true,
            drop_whitespace: true,
            initial_indent: String::new(),
            subsequent_indent: String::new(),
            fix_sentence_endings: false,
            break_long_words: true,
            break_on_hyphens: true,
            max_lines: 0,
            placeholder: " [...]".to_string(),
        }
    }
}

impl WrapOptions {
    /// Creates options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the line width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Enables or disables tab expansion.
    pub fn with_expand_tabs(mut self, expand_tabs: bool) -> Self {
        self.expand_tabs = expand_tabs;
        self
    }

    /// Sets the number of spaces a tab expands to.
    pub fn with_tab_size(mut self, tab_size: usize) -> Self {
        self.tab_size = tab_size;
        self
    }

    /// Enables or disables replacing non-space whitespace with spaces.
    pub fn with_replace_whitespace(mut self, replace_whitespace: bool) -> Self {
        self.replace_whitespace = replace_whitespace;
        self
    }

    /// Enables or disables dropping whitespace around line breaks.
    pub fn with_drop_whitespace(mut self, drop_whitespace: bool) -> Self {
        self.drop_whitespace = drop_whitespace;
        self
    }

    /// Sets the first line prefix.
    pub fn with_initial_indent(mut self, indent: impl Into<String>) -> Self {
        self.initial_indent = indent.into();
        self
    }

    /// Sets the prefix of lines after the first.
    pub fn with_subsequent_indent(mut self, indent: impl Into<String>) -> Self {
        self.subsequent_indent = indent.into();
        self
    }

    /// Enables or disables double spacing after sentence endings.
    pub fn with_fix_sentence_endings(mut self, fix: bool) -> Self {
        self.fix_sentence_endings = fix;
        self
    }

    /// Enables or disables splitting of over-long words.
    pub fn with_break_long_words(mut self, break_long_words: bool) -> Self {
        self.break_long_words = break_long_words;
        self
    }

    /// Enables or disables breaking after hyphens.
    pub fn with_break_on_hyphens(mut self, break_on_hyphens: bool) -> Self {
        self.break_on_hyphens = break_on_hyphens;
        self
    }

    /// Sets the maximum number of lines (0 = unlimited).
    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    /// Sets the truncation placeholder.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Indent of the line that would carry the placeholder under `max_lines`.
    pub(crate) fn last_line_indent(&self) -> &str {
        if self.max_lines == 1 {
            &self.initial_indent
        } else {
            &self.subsequent_indent
        }
    }

    /// Checks that text can be wrapped with these options.
    ///
    /// Rules, in order:
    /// - `width` must be at least 1.
    /// - With `max_lines > 0`, the indent of the last line plus the
    ///   left-stripped placeholder must fit in `width`.
    ///
    /// A negative tab size is unrepresentable since `tab_size` is unsigned.
    pub fn validate(&self) -> Result<(), WrapError> {
        if self.width < 1 {
            return Err(WrapError::InvalidWidth(self.width));
        }

        if self.max_lines > 0 {
            let indent = self.last_line_indent();
            if rune_len(indent) + rune_len(lstrip(&self.placeholder)) > self.width {
                return Err(WrapError::PlaceholderTooWide {
                    placeholder: self.placeholder.clone(),
                    indent: indent.to_string(),
                    width: self.width,
                });
            }
        }

        Ok(())
    }
}
