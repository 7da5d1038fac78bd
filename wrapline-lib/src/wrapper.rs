//! Wrapping entry points.

use crate::chunk::{Chunk, Grammar, tokenize};
use crate::error::WrapError;
use crate::options::WrapOptions;
use crate::packer::pack;
use crate::preprocess::{collapse_whitespace, preprocess};

/// A reusable wrapper.
///
/// Everything derived from the options (token grammar, tab expansion) is
/// computed once in [`new`](Self::new). The wrapper is immutable afterwards
/// and can be shared between threads.
///
/// # Example
///
/// ```
/// use wrapline_lib::{TextWrapper, WrapOptions};
///
/// let wrapper = TextWrapper::new(WrapOptions::new().with_width(10));
/// let lines = wrapper.wrap("The quick brown fox jumped over the lazy dog")?;
/// assert_eq!(lines, ["The quick", "brown fox", "jumped", "over the", "lazy dog"]);
/// # Ok::<(), wrapline_lib::WrapError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TextWrapper {
    options: WrapOptions,
    grammar: Grammar,
    tab: String,
}

impl TextWrapper {
    pub fn new(options: WrapOptions) -> Self {
        let grammar = Grammar::for_options(&options);
        let tab = " ".repeat(options.tab_size);
        Self {
            options,
            grammar,
            tab,
        }
    }

    pub fn options(&self) -> &WrapOptions {
        &self.options
    }

    /// Wraps `text` into lines of at most `width` runes, indent included.
    ///
    /// The one exception is a word wider than the line when
    /// `break_long_words` is off: it is placed alone on its line.
    pub fn wrap(&self, text: &str) -> Result<Vec<String>, WrapError> {
        self.options.validate()?;

        let text = preprocess(text, &self.options, &self.tab);
        let chunks: Vec<Chunk> = tokenize(&text, self.grammar).collect();
        log::trace!("wrapping {} chunks at width {}", chunks.len(), self.options.width);

        Ok(pack(&chunks, &self.options))
    }

    /// Wraps `text` and joins the lines with newlines.
    pub fn fill(&self, text: &str) -> Result<String, WrapError> {
        Ok(self.wrap(text)?.join("\n"))
    }

    /// Collapses whitespace in `text` and fits it on a single line,
    /// truncating with the placeholder when it does not fit.
    ///
    /// `expand_tabs`, `tab_size`, `replace_whitespace` and `max_lines` have
    /// no effect here.
    pub fn shorten(&self, text: &str) -> Result<String, WrapError> {
        let single = TextWrapper::new(self.options.clone().with_max_lines(1));
        single.fill(&collapse_whitespace(text))
    }
}

impl Default for TextWrapper {
    fn default() -> Self {
        Self::new(WrapOptions::default())
    }
}

/// Wraps `text` into lines. See [`TextWrapper::wrap`].
pub fn wrap(text: &str, options: &WrapOptions) -> Result<Vec<String>, WrapError> {
    TextWrapper::new(options.clone()).wrap(text)
}

/// Wraps `text` into a newline-separated string. See [`TextWrapper::fill`].
pub fn fill(text: &str, options: &WrapOptions) -> Result<String, WrapError> {
    TextWrapper::new(options.clone()).fill(text)
}

/// Fits `text` on one line. See [`TextWrapper::shorten`].
///
/// ```
/// use wrapline_lib::{WrapOptions, shorten};
///
/// let options = WrapOptions::new().with_width(11);
/// assert_eq!(shorten("Hello  world, how are you?", &options)?, "Hello [...]");
/// # Ok::<(), wrapline_lib::WrapError>(())
/// ```
pub fn shorten(text: &str, options: &WrapOptions) -> Result<String, WrapError> {
    TextWrapper::new(options.clone()).shorten(text)
}
