//! Text wrapping library
//!
//! Reformats text into lines that fit a target width: tab expansion,
//! whitespace normalization, hyphen-aware word breaking, indentation,
//! and truncation to a maximum number of lines with a placeholder.
//!
//! Widths are counted in runes (`char`s).

pub mod chunk;
pub mod error;
pub mod options;
pub mod packer;
pub mod preprocess;
pub mod text;
pub mod utils;
pub mod wrapper;

pub use error::WrapError;
pub use options::WrapOptions;
pub use utils::{center, dedent, indent};
pub use wrapper::{TextWrapper, fill, shorten, wrap};
