//! Result types shared by Kruskal and Prim.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    graph::{EdgeIndex, EdgeRef, VertexId, Weight},
    Graph, MstConfig, MstError, Result,
};

/// An edge accepted into a spanning tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MstEdge {
    /// Index of the canonical edge in the graph's edge sequence.
    pub edge_index: EdgeIndex,
    pub from: VertexId,
    pub to: VertexId,
    pub weight: Weight,
}

impl MstEdge {
    /// Payload of the canonical edge this entry was taken from.
    #[must_use]
    pub fn payload<'g, V, E>(&self, graph: &'g Graph<V, E>) -> Option<&'g E> {
        graph.edge(self.edge_index).map(|edge| edge.payload())
    }
}

impl<E> From<EdgeRef<'_, E>> for MstEdge {
    fn from(edge: EdgeRef<'_, E>) -> Self {
        Self {
            edge_index: edge.index,
            from: edge.from,
            to: edge.to,
            weight: edge.weight,
        }
    }
}

/// Result of a spanning tree computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MstResult {
    /// Accepted edges. Kruskal lists them by ascending weight, Prim in
    /// acceptance order.
    pub edges: Vec<MstEdge>,
    /// Sum of the accepted edge weights.
    pub total_weight: Weight,
    /// Number of vertices the computation ran over.
    pub vertex_count: usize,
    /// Number of trees in the result (isolated vertices count as trees).
    pub tree_count: usize,
}

impl MstResult {
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            edges: Vec::new(),
            total_weight: 0,
            vertex_count: 0,
            tree_count: 0,
        }
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// True when the edges connect all `vertex_count` vertices.
    #[must_use]
    pub fn is_spanning_tree(&self) -> bool {
        self.edges.len() + 1 >= self.vertex_count
    }

    /// Edges a spanning tree over `vertex_count` vertices needs.
    #[must_use]
    pub const fn required_edges(&self) -> usize {
        self.vertex_count.saturating_sub(1)
    }

    /// Vertices touched by the accepted edges, ascending.
    #[must_use]
    pub fn vertices(&self) -> Vec<VertexId> {
        let mut ids: Vec<VertexId> = self.edges.iter().flat_map(|e| [e.from, e.to]).collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    /// Payloads of the accepted edges, in result order.
    pub fn payloads<'a, V, E>(
        &'a self,
        graph: &'a Graph<V, E>,
    ) -> impl Iterator<Item = &'a E> + 'a {
        self.edges.iter().filter_map(move |edge| edge.payload(graph))
    }

    /// Apply the caller's spanning requirement and log incomplete results.
    pub(crate) fn finish(self, algorithm: &'static str, config: &MstConfig) -> Result<Self> {
        if self.is_spanning_tree() {
            return Ok(self);
        }
        if config.require_spanning {
            return Err(MstError::NotSpanning {
                accepted: self.edges.len(),
                required: self.required_edges(),
            });
        }
        warn!(
            algorithm,
            accepted = self.edges.len(),
            required = self.required_edges(),
            "graph is not connected, returning partial result"
        );
        Ok(self)
    }
}

impl Default for MstResult {
    fn default() -> Self {
        Self::empty()
    }
}

/// Reject graphs the spanning tree algorithms are not defined on.
pub(crate) fn require_undirected<V, E>(graph: &Graph<V, E>, algorithm: &'static str) -> Result<()> {
    if graph.is_directed() {
        return Err(MstError::InvalidOperation { algorithm });
    }
    Ok(())
}
