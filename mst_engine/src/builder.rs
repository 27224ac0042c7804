//! Detached vertices and edges, validated before they reach a graph.

use serde::{Deserialize, Serialize};

use crate::{
    graph::{EdgeIndex, VertexId, Weight},
    Graph, MstError, Result,
};

/// Edge described outside of any graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEdge<E> {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: Weight,
    pub payload: E,
}

impl<E> NewEdge<E> {
    /// Build an edge from optional endpoints.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConstruction` when either endpoint is missing.
    pub fn new(
        from: Option<VertexId>,
        to: Option<VertexId>,
        weight: Weight,
        payload: E,
    ) -> Result<Self> {
        match (from, to) {
            (Some(from), Some(to)) => Ok(Self {
                from,
                to,
                weight,
                payload,
            }),
            (None, None) => Err(MstError::InvalidConstruction(
                "edge has no endpoints".to_string(),
            )),
            (None, Some(to)) => Err(MstError::InvalidConstruction(format!(
                "edge to {to} is missing its source vertex"
            ))),
            (Some(from), None) => Err(MstError::InvalidConstruction(format!(
                "edge from {from} is missing its target vertex"
            ))),
        }
    }
}

/// Vertex described outside of any graph, together with the edges it brings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewVertex<V, E> {
    pub id: VertexId,
    pub name: String,
    pub payload: V,
    edges: Vec<NewEdge<E>>,
}

impl<V, E> NewVertex<V, E> {
    /// # Errors
    ///
    /// Returns `InvalidConstruction` when `edges` is empty.
    pub fn new(
        id: VertexId,
        name: impl Into<String>,
        payload: V,
        edges: Vec<NewEdge<E>>,
    ) -> Result<Self> {
        if edges.is_empty() {
            return Err(MstError::InvalidConstruction(format!(
                "vertex {id} has no edges"
            )));
        }
        Ok(Self {
            id,
            name: name.into(),
            payload,
            edges,
        })
    }

    #[must_use]
    pub fn edges(&self) -> &[NewEdge<E>] {
        &self.edges
    }
}

impl<V: Default, E> Graph<V, E> {
    /// Insert a detached edge. Returns its index in the edge sequence.
    pub fn add_new_edge(&mut self, edge: NewEdge<E>) -> EdgeIndex {
        self.add_edge(edge.from, edge.to, edge.weight, edge.payload);
        self.edge_count() - 1
    }

    /// Insert a detached vertex and then each of its edges.
    ///
    /// The vertex follows the usual first-writer-wins rule; its edges are
    /// always inserted. Returns the indices of the inserted edges.
    pub fn add_new_vertex(&mut self, vertex: NewVertex<V, E>) -> Vec<EdgeIndex> {
        self.add_vertex(vertex.id, vertex.name, vertex.payload);
        vertex
            .edges
            .into_iter()
            .map(|edge| self.add_new_edge(edge))
            .collect()
    }
}
