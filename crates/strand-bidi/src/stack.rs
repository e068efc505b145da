//! Embedding stack tracking.
//!
//! An [`EmbeddingStack`] holds the embeddings open at some position in a
//! string, outermost first. It only ever contains opening directions; `POP`
//! marks shrink it.

use crate::mark::{Direction, Mark};

/// Embeddings open at a position in a string, outermost first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmbeddingStack {
    open: Vec<Direction>,
}

impl EmbeddingStack {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the stack of embeddings open at the end of `text`.
    #[must_use]
    pub fn at_end_of(text: &str) -> Self {
        let mut stack = Self::new();
        stack.walk(text);
        stack
    }

    /// Number of open embeddings.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Returns `true` if no embedding is open.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Open embeddings, outermost first.
    #[must_use]
    pub fn directions(&self) -> &[Direction] {
        &self.open
    }

    /// Apply a single mark.
    ///
    /// A `POP` with nothing open is ignored so that malformed input still
    /// produces a result. Returns `false` in that case.
    pub fn apply(&mut self, mark: Mark) -> bool {
        match mark {
            Mark::Embed(direction) => {
                self.open.push(direction);
                true
            }
            Mark::Pop => self.open.pop().is_some(),
        }
    }

    /// Apply every mark in `text` in order.
    ///
    /// Returns the smallest depth observed after any pop, starting from the
    /// depth on entry. This is how far the nesting ever closes inside `text`.
    pub fn walk(&mut self, text: &str) -> usize {
        self.walk_with(text, 0, log_unmatched_pop)
    }

    /// Like [`walk`](Self::walk), reporting every ignored `POP` to
    /// `on_unmatched`.
    ///
    /// `text` is taken to start at byte offset `base` of a larger source;
    /// reported offsets are `base` plus the position within `text`.
    pub fn walk_with(
        &mut self,
        text: &str,
        base: usize,
        mut on_unmatched: impl FnMut(usize),
    ) -> usize {
        let mut minimum_depth = self.depth();
        for (index, ch) in text.char_indices() {
            let Some(mark) = Mark::from_char(ch) else {
                continue;
            };
            if !self.apply(mark) {
                on_unmatched(base + index);
            }
            if mark == Mark::Pop {
                minimum_depth = minimum_depth.min(self.depth());
            }
        }
        minimum_depth
    }
}

fn log_unmatched_pop(offset: usize) {
    tracing::trace!(offset, "Ignoring pop mark with no open embedding");
}

/// An [`EmbeddingStack`] bound to a byte position in a source string.
///
/// Advancing only walks the text between the previous position and the new
/// one, so repeated slices of the same string share a single prefix scan.
#[derive(Debug, Clone, Default)]
pub(crate) struct StackCursor {
    stack: EmbeddingStack,
    position: usize,
}

impl StackCursor {
    /// Current stack.
    pub(crate) fn stack(&self) -> &EmbeddingStack {
        &self.stack
    }

    /// Move to byte offset `target` in `source`, walking the marks in between.
    ///
    /// Returns the minimum depth observed during the walk. Moving backwards
    /// restarts the scan from the beginning of `source`.
    pub(crate) fn advance_to(&mut self, source: &str, target: usize) -> usize {
        if target < self.position {
            self.stack = EmbeddingStack::new();
            self.position = 0;
        }
        let text = &source[self.position..target];
        let minimum_depth = self.stack.walk_with(text, self.position, log_unmatched_pop);
        self.position = target;
        minimum_depth
    }
}
