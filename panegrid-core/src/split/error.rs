//! Error types for split tree operations
//!
//! Edits that cannot apply (unknown id, wrong node kind, root removal) report
//! a `LayoutError` and leave the tree untouched. Hosts that want the
//! "silent no-op" behavior simply ignore the error.

use super::types::NodeId;

/// Errors that can occur during split tree operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// The specified node was not found.
    #[error("node not found: {0}")]
    NotFound(NodeId),

    /// The operation requires a leaf but the node is a split.
    #[error("node is not a leaf: {0}")]
    NotALeaf(NodeId),

    /// The root node cannot be removed or reweighted.
    #[error("operation not permitted on the root node: {0}")]
    RootProtected(NodeId),

    /// Weights must be finite and strictly positive.
    #[error("invalid weight: {0} (must be finite and greater than 0)")]
    InvalidWeight(f64),

    /// A split node has fewer than two children.
    #[error("split node has fewer than two children: {0}")]
    TooFewChildren(NodeId),

    /// The same id appears more than once in the tree.
    #[error("duplicate node id: {0}")]
    DuplicateId(NodeId),
}

/// Result type for split tree operations
pub type LayoutResult<T> = std::result::Result<T, LayoutError>;
