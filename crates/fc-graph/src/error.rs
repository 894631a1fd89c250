//! Graph-specific error types.

use fc_core::{EdgeId, FcError, NodeId, Real};
use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

/// Graph construction, lookup and validation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// A node with this name is already part of the graph.
    #[error("Node '{name}' already exists")]
    DuplicateNode { name: String },

    /// No live node carries this name.
    #[error("Node '{name}' not found")]
    NodeNotFound { name: String },

    /// An id that points at an empty or out-of-range arena slot.
    #[error("{what} {index} does not refer to a live entry")]
    StaleId { what: &'static str, index: u32 },

    /// Adjacency list is inconsistent (edge listed under a node it doesn't touch).
    #[error("Edge {edge} in node {node}'s adjacency list doesn't match its endpoints")]
    InconsistentAdjacency { edge: EdgeId, node: NodeId },

    /// An edge's residual capacity left the `[0, capacity]` range.
    #[error("Edge {edge} has remaining {remaining} outside [0, {capacity}]")]
    ResidualOutOfRange {
        edge: EdgeId,
        remaining: Real,
        capacity: Real,
    },

    #[error(transparent)]
    Core(#[from] FcError),
}
