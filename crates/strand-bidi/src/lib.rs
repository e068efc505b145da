//! Direction-aware slicing and splitting for Strand.
//!
//! Text assembled from left-to-right and right-to-left fragments carries
//! explicit embedding marks (`U+202A`, `U+202B`, `U+202C`). Cutting such a
//! string with a plain substring operation drops the context that was opened
//! before the cut. This crate provides:
//!
//! - [`embedded_slice`] / [`Slicer::slice`]: substring that re-opens and closes
//!   embeddings at the cut, without redundant outer layers
//! - [`embedded_split`] / [`Slicer::split`]: split on a literal or regex
//!   [`Separator`], slicing every segment the same way
//! - [`EmbeddingStack`]: the embeddings open at a position
//! - [`embedded_debug_string`], [`wrap_ltr`], [`wrap_rtl`] and friends
//!
//! Indices are char offsets. Malformed input (a `POP` with nothing open) is
//! accepted; the stray `POP` is ignored when tracking context.
//!
//! # Example
//!
//! ```
//! use strand_bidi::{embedded_debug_string, embedded_slice};
//!
//! let text = "\u{202A}first\u{202B}second\u{202C}third\u{202C}";
//! let slice = embedded_slice(text, 3, Some(-3));
//! assert_eq!(embedded_debug_string(&slice), "[LTR]rst[RTL]second[POP]thi[POP]");
//! ```

mod error;
mod mark;
mod slice;
mod split;
mod stack;

pub use error::BidiError;
pub use mark::{
    Direction, LTR_EMBED, Mark, POP, RTL_EMBED, embedded_debug_string, is_embedding_mark,
    parse_debug_string, strip_embedding_marks, wrap_direction, wrap_ltr, wrap_rtl,
};
pub use slice::{Slicer, embedded_slice};
pub use split::{Separator, embedded_split};
pub use stack::EmbeddingStack;
