//! Error types for spanning tree computation.

use thiserror::Error;

use crate::graph::{VertexId, Weight};

/// Error type for graph construction and spanning tree operations.
///
/// Every variant describes bad caller input. Nothing in this crate performs
/// I/O, so there is no retryable failure class.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MstError {
    /// The algorithm requires an undirected graph but was given a directed one.
    #[error("invalid operation: {algorithm} requires an undirected graph")]
    InvalidOperation { algorithm: &'static str },

    /// Vertex with the given identity is not part of the graph.
    #[error("vertex not found: {0}")]
    NotFound(VertexId),

    /// A detached vertex or edge was built from incomplete parts.
    #[error("invalid construction: {0}")]
    InvalidConstruction(String),

    /// A spanning tree was required but the result only covers part of the graph.
    #[error("result does not span the graph: accepted {accepted} of {required} required edges")]
    NotSpanning { accepted: usize, required: usize },

    /// A weight sum left the range of [`Weight`].
    #[error("weight overflow: {total} + {weight} does not fit in a weight")]
    WeightOverflow { total: Weight, weight: Weight },
}

/// Result type alias for spanning tree operations.
pub type Result<T> = std::result::Result<T, MstError>;
