//! Index-based graph container.
//!
//! The graph owns every vertex and edge in two dense arenas. Adjacency lists
//! hold [`HalfEdge`]s that point back into the global edge sequence, so an
//! undirected edge is stored once and seen from both endpoints without a second
//! edge record.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{config::GraphConfig, MstError, Result};

/// Vertex identity.
pub type VertexId = u64;

/// Edge weight.
pub type Weight = i64;

/// Position of an edge in the graph's global edge sequence (insertion order).
pub type EdgeIndex = usize;

/// Add `weight` to a running `total`, failing instead of wrapping.
pub(crate) fn add_weight(total: Weight, weight: Weight) -> Result<Weight> {
    total
        .checked_add(weight)
        .ok_or(MstError::WeightOverflow { total, weight })
}

/// Which way an adjacency entry walks its canonical edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// `from -> to`, as inserted.
    Forward,
    /// `to -> from`, the mirror entry of an undirected edge.
    Reverse,
}

/// Adjacency entry referring to a canonical edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HalfEdge {
    pub edge: EdgeIndex,
    pub orientation: Orientation,
}

/// A vertex owned by a [`Graph`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex<V> {
    id: VertexId,
    name: String,
    payload: V,
    adjacency: Vec<HalfEdge>,
}

impl<V> Vertex<V> {
    fn new(id: VertexId, name: String, payload: V) -> Self {
        Self {
            id,
            name,
            payload,
            adjacency: Vec::new(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> VertexId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn payload(&self) -> &V {
        &self.payload
    }

    /// Outgoing adjacency in insertion order.
    #[must_use]
    pub fn adjacency(&self) -> &[HalfEdge] {
        &self.adjacency
    }

    #[must_use]
    pub fn degree(&self) -> usize {
        self.adjacency.len()
    }
}

/// A canonical edge stored in a [`Graph`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge<E> {
    from: VertexId,
    to: VertexId,
    weight: Weight,
    payload: E,
}

impl<E> Edge<E> {
    #[must_use]
    pub const fn from(&self) -> VertexId {
        self.from
    }

    #[must_use]
    pub const fn to(&self) -> VertexId {
        self.to
    }

    #[must_use]
    pub const fn weight(&self) -> Weight {
        self.weight
    }

    #[must_use]
    pub const fn payload(&self) -> &E {
        &self.payload
    }

    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// Oriented, borrowed view of a canonical edge as seen from one endpoint.
#[derive(Debug)]
pub struct EdgeRef<'g, E> {
    pub index: EdgeIndex,
    pub from: VertexId,
    pub to: VertexId,
    pub weight: Weight,
    pub payload: &'g E,
}

impl<E> Clone for EdgeRef<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for EdgeRef<'_, E> {}

/// Weighted graph owning all of its vertices and edges.
#[derive(Debug, Clone)]
pub struct Graph<V = (), E = ()> {
    directed: bool,
    vertices: Vec<Vertex<V>>,
    slots: HashMap<VertexId, usize>,
    edges: Vec<Edge<E>>,
}

impl<V, E> Default for Graph<V, E> {
    fn default() -> Self {
        Self::new(false)
    }
}

impl<V, E> Graph<V, E> {
    #[must_use]
    pub fn new(directed: bool) -> Self {
        Self::with_config(GraphConfig::new().directed(directed))
    }

    #[must_use]
    pub fn undirected() -> Self {
        Self::new(false)
    }

    #[must_use]
    pub fn directed() -> Self {
        Self::new(true)
    }

    #[must_use]
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            directed: config.directed,
            vertices: Vec::with_capacity(config.vertex_capacity),
            slots: HashMap::with_capacity(config.vertex_capacity),
            edges: Vec::with_capacity(config.edge_capacity),
        }
    }

    #[must_use]
    pub const fn is_directed(&self) -> bool {
        self.directed
    }

    /// Insert a vertex, or return the existing one with the same identity.
    ///
    /// The first insertion wins: a later call with a known `id` leaves the
    /// stored name and payload untouched.
    pub fn add_vertex(&mut self, id: VertexId, name: impl Into<String>, payload: V) -> &Vertex<V> {
        let slot = match self.slots.get(&id) {
            Some(&slot) => {
                trace!(vertex_id = id, "vertex already present, keeping first insertion");
                slot
            },
            None => self.push_vertex(id, name.into(), payload),
        };
        &self.vertices[slot]
    }

    /// Insert an edge, creating missing endpoints with a default payload.
    ///
    /// An auto-created endpoint is named after its identity and cannot be
    /// renamed later, so call [`Graph::add_vertex`] first to keep a name and payload.
    ///
    /// Undirected graphs also get a reverse adjacency entry on `to`; the global
    /// edge sequence only ever holds the forward edge.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: Weight, payload: E) -> &Edge<E>
    where
        V: Default,
    {
        let from_slot = self.ensure_vertex(from);
        let to_slot = self.ensure_vertex(to);

        let index = self.edges.len();
        self.edges.push(Edge {
            from,
            to,
            weight,
            payload,
        });

        self.vertices[from_slot].adjacency.push(HalfEdge {
            edge: index,
            orientation: Orientation::Forward,
        });
        if !self.directed {
            self.vertices[to_slot].adjacency.push(HalfEdge {
                edge: index,
                orientation: Orientation::Reverse,
            });
        }

        &self.edges[index]
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of inserted edges. Undirected edges count once.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn get_vertex(&self, id: VertexId) -> Option<&Vertex<V>> {
        self.slots.get(&id).map(|&slot| &self.vertices[slot])
    }

    #[must_use]
    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.slots.contains_key(&id)
    }

    #[must_use]
    pub fn edge(&self, index: EdgeIndex) -> Option<&Edge<E>> {
        self.edges.get(index)
    }

    /// All canonical edges in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Edge<E>] {
        &self.edges
    }

    /// All vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<V>> {
        self.vertices.iter()
    }

    /// Vertex identities in ascending order.
    #[must_use]
    pub fn vertex_ids(&self) -> Vec<VertexId> {
        let mut ids: Vec<VertexId> = self.slots.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Smallest vertex identity, if the graph has any vertex.
    #[must_use]
    pub fn min_vertex_id(&self) -> Option<VertexId> {
        self.slots.keys().copied().min()
    }

    /// Edges leaving `id`, oriented away from it, in adjacency order.
    ///
    /// Unknown vertices have no edges.
    pub fn edges_from(&self, id: VertexId) -> impl Iterator<Item = EdgeRef<'_, E>> {
        self.get_vertex(id)
            .map(|vertex| vertex.adjacency.iter())
            .into_iter()
            .flatten()
            .filter_map(move |half| self.view(*half))
    }

    /// Neighbor identities of `id` in adjacency order (duplicates kept).
    pub fn neighbors(&self, id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.edges_from(id).map(|edge| edge.to)
    }

    #[must_use]
    pub fn degree(&self, id: VertexId) -> Option<usize> {
        self.get_vertex(id).map(Vertex::degree)
    }

    /// Sum of all edge weights.
    ///
    /// # Errors
    ///
    /// Returns `WeightOverflow` when the sum does not fit in a [`Weight`].
    pub fn total_weight(&self) -> Result<Weight> {
        self.edges
            .iter()
            .try_fold(0, |total, edge| add_weight(total, edge.weight()))
    }

    /// Resolve an adjacency entry to an oriented view of its canonical edge.
    #[must_use]
    pub fn view(&self, half: HalfEdge) -> Option<EdgeRef<'_, E>> {
        let edge = self.edges.get(half.edge)?;
        let (from, to) = match half.orientation {
            Orientation::Forward => (edge.from, edge.to),
            Orientation::Reverse => (edge.to, edge.from),
        };
        Some(EdgeRef {
            index: half.edge,
            from,
            to,
            weight: edge.weight,
            payload: &edge.payload,
        })
    }

    fn push_vertex(&mut self, id: VertexId, name: String, payload: V) -> usize {
        let slot = self.vertices.len();
        self.vertices.push(Vertex::new(id, name, payload));
        self.slots.insert(id, slot);
        slot
    }

    fn ensure_vertex(&mut self, id: VertexId) -> usize
    where
        V: Default,
    {
        match self.slots.get(&id) {
            Some(&slot) => slot,
            None => self.push_vertex(id, id.to_string(), V::default()),
        }
    }
}
