//! Errors reported by strict slicing.

/// Invalid-argument errors raised when [`Slicer`](crate::Slicer) is strict.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BidiError {
    /// A negative `end` reaches further back than the start of the string.
    #[error("Slice end {end} is out of range for a string of length {len}")]
    EndOutOfRange {
        /// The `end` argument as given.
        end: isize,
        /// Length of the source in chars.
        len: usize,
    },
}
