use thiserror::Error;

/// Reasons a [`Range`](crate::Range) is rejected before it reaches the tree.
///
/// A rejected range never mutates the tree: every operation validates its
/// argument before touching any node.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InvalidRangeError {
    /// The range or one of its endpoints was absent.
    #[error("range start and end cannot be absent")]
    MissingBound,
    /// The range starts after it ends.
    #[error("invalid range: start is greater than end")]
    StartAfterEnd,
}
