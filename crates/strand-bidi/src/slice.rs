//! Embedding-preserving substring extraction.
//!
//! A plain substring of text containing directional embeddings loses the
//! context opened before the cut and may leave embeddings dangling after it.
//! [`embedded_slice`] re-opens the embeddings active at the start of the
//! slice and closes the ones still open at its end, skipping outer layers the
//! slice never leaves.

use crate::error::BidiError;
use crate::mark::{POP, is_embedding_mark};
use crate::stack::StackCursor;

/// Slicing policy.
///
/// When `strict`, invalid arguments are reported as [`BidiError`]s. When
/// lenient they are clamped so that every call produces a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slicer {
    strict: bool,
}

impl Default for Slicer {
    /// Strict in debug builds, lenient in release builds.
    fn default() -> Self {
        Self::new(cfg!(debug_assertions))
    }
}

impl Slicer {
    /// Create a slicer with an explicit policy.
    #[must_use]
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }

    /// Slicer that reports invalid arguments.
    #[must_use]
    pub fn strict() -> Self {
        Self::new(true)
    }

    /// Slicer that clamps invalid arguments.
    #[must_use]
    pub fn lenient() -> Self {
        Self::new(false)
    }

    /// Whether invalid arguments are reported.
    #[must_use]
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Slice `source` between char indices `start` and `end`, keeping the
    /// embedding context intact.
    ///
    /// `end` defaults to the length of `source`. A negative `end` counts back
    /// from the end of the string. An `end` past the end is clamped; a
    /// `start` at or past the end yields an empty string.
    ///
    /// # Errors
    ///
    /// Returns [`BidiError::EndOutOfRange`] when strict and a negative `end`
    /// reaches before the start of the string. A lenient slicer treats such
    /// an `end` as 0.
    pub fn slice(
        &self,
        source: &str,
        start: usize,
        end: Option<isize>,
    ) -> Result<String, BidiError> {
        let len = source.chars().count();
        let end = match end {
            None => len,
            Some(end) if end < 0 => match len.checked_sub(end.unsigned_abs()) {
                Some(resolved) => resolved,
                None if self.strict => return Err(BidiError::EndOutOfRange { end, len }),
                None => 0,
            },
            Some(end) => end.unsigned_abs().min(len),
        };

        // Normalization only ever narrows the range
        if start >= end {
            return Ok(String::new());
        }

        let start = byte_offset(source, start);
        let end = byte_offset(source, end);
        Ok(slice_range(source, start, end, &mut StackCursor::default()))
    }
}

/// Slice `source` between char indices, preserving embedding context.
///
/// Lenient form of [`Slicer::slice`]: never fails.
///
/// # Example
///
/// ```
/// use strand_bidi::{embedded_debug_string, embedded_slice};
///
/// let text = "\u{202A}first\u{202B}second\u{202C}third\u{202C}";
/// assert_eq!(embedded_debug_string(&embedded_slice(text, 0, Some(6))), "[LTR]first[POP]");
/// assert_eq!(embedded_debug_string(&embedded_slice(text, 6, Some(14))), "[RTL]second[POP]");
/// ```
#[must_use]
pub fn embedded_slice(source: &str, start: usize, end: Option<isize>) -> String {
    Slicer::lenient()
        .slice(source, start, end)
        .unwrap_or_default()
}

/// Byte offset of the char at `index`, or the length of `source` past the end.
fn byte_offset(source: &str, index: usize) -> usize {
    source
        .char_indices()
        .nth(index)
        .map_or(source.len(), |(offset, _)| offset)
}

/// Core slice over byte offsets on char boundaries.
///
/// `cursor` must not be past the normalized start. On return it sits at the
/// normalized end, unless the slice turned out empty.
pub(crate) fn slice_range(
    source: &str,
    start: usize,
    end: usize,
    cursor: &mut StackCursor,
) -> String {
    let (start, end) = normalize_bounds(source, start, end);
    if start >= end {
        return String::new();
    }

    cursor.advance_to(source, start);
    let start_stack = cursor.stack().clone();
    let minimum_depth = cursor.advance_to(source, end);
    let end_stack = cursor.stack();

    // Keep at least the innermost layer
    let skip = minimum_depth.saturating_sub(1);
    let body = &source[start..end];

    tracing::trace!(
        start,
        end,
        start_depth = start_stack.depth(),
        end_depth = end_stack.depth(),
        skip,
        "Sliced embedded range"
    );

    let prefix = start_stack.directions().iter().skip(skip);
    let pops = end_stack.depth().saturating_sub(skip);

    let mut out = String::with_capacity(body.len() + (prefix.len() + pops) * POP.len_utf8());
    out.extend(prefix.map(|direction| direction.embed_char()));
    out.push_str(body);
    out.extend(std::iter::repeat_n(POP, pops));
    out
}

/// Move `start` forward past marks and `end` backward before marks.
fn normalize_bounds(source: &str, mut start: usize, mut end: usize) -> (usize, usize) {
    while let Some(ch) = source[start..].chars().next() {
        if !is_embedding_mark(ch) {
            break;
        }
        start += ch.len_utf8();
    }
    while end > start {
        match source[..end].chars().next_back() {
            Some(ch) if is_embedding_mark(ch) => end -= ch.len_utf8(),
            _ => break,
        }
    }
    (start, end)
}
