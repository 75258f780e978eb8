//! Error types for the dynamic merkle tree

use thiserror::Error;

use crate::node::NodeId;

/// Error type for tree operations.
///
/// `ContentError` is the error type of the [`Content`](crate::Content) stored in the tree.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum TreeError<ContentError> {
    /// A tree needs at least one leaf
    #[error("cannot construct tree with no content")]
    EmptyInput,
    /// Branching factor must be at least 2
    #[error("invalid branching factor {0}, expected at least 2")]
    InvalidBranchingFactor(usize),
    /// A content item failed to compute its digest
    #[error("content hash error: {0}")]
    Hash(ContentError),
    /// A content item failed to compare itself with another one
    #[error("content comparison error: {0}")]
    Comparison(ContentError),
    /// The padding leaves could not be allocated
    #[error("cannot allocate {requested} padding leaves")]
    PaddingOverflow { requested: usize },
    /// Leaf index outside of the current leaf sequence
    #[error("leaf index {index} out of range (length: {len})")]
    IndexOutOfRange { index: usize, len: usize },
    /// A node digest or link does not match its children
    #[error("node {node} does not match its children")]
    Corrupted { node: NodeId },
}
