//! Error types

use thiserror::Error;

/// Errors raised when a [`WrapOptions`](crate::WrapOptions) cannot be used for wrapping.
///
/// These are reported at the start of a wrap call and are never corrected
/// silently: an invalid configuration is a caller bug.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WrapError {
    /// The target width leaves no room for any text.
    #[error("width must be at least 1, got {0}")]
    InvalidWidth(usize),

    /// The last line of a truncated wrap could never hold the indent plus the placeholder.
    #[error(
        "placeholder {placeholder:?} does not fit on a line of width {width} indented by {indent:?}"
    )]
    PlaceholderTooWide {
        placeholder: String,
        indent: String,
        width: usize,
    },
}
