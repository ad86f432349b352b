//! Errors returned by [`WeightedTree`][crate::WeightedTree] operations.

use thiserror::Error;

use crate::Weight;

/// Why a tree operation was rejected. A rejected call never leaves the tree
/// partially modified.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// An insert collided with a node that already has this weight.
    #[error("weight {0} is already present")]
    DuplicateKey(Weight),

    /// A remove or search found no node to act on.
    #[error("no matching node")]
    NotFound,

    /// A traversal buffer is shorter than the number of nodes in the tree.
    #[error("buffer holds {capacity} entries but the tree has {size} nodes")]
    CapacityTooSmall {
        /// Length of the buffer the caller supplied.
        capacity: usize,
        /// Number of nodes in the tree at the time of the call.
        size: usize,
    },
}

/// Shorthand for results of tree operations.
pub type Result<T> = std::result::Result<T, TreeError>;
