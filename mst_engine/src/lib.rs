// Pedantic lint configuration for mst_engine
#![allow(clippy::module_name_repetitions)] // MstResult, MstError read better than Result, Error
#![allow(clippy::must_use_candidate)] // Accessors are annotated where it matters

//! Minimum spanning trees over weighted undirected graphs.
//!
//! A [`Graph`] owns its vertices and edges in index-based arenas. Spanning
//! trees are computed with [`Graph::kruskal`] or [`Graph::prim`], both of
//! which return an [`MstResult`] holding the accepted edges and their total
//! weight. Disconnected graphs yield forests (Kruskal) or partial trees
//! (Prim) unless `MstConfig::require_spanning` is set.

pub mod algorithms;
mod builder;
mod config;
mod error;
pub mod graph;
pub mod queue;
pub mod union_find;

pub use algorithms::{MstEdge, MstResult};
pub use builder::{NewEdge, NewVertex};
pub use config::{GraphConfig, MstConfig};
pub use error::{MstError, Result};
pub use graph::{Edge, EdgeIndex, EdgeRef, Graph, HalfEdge, Orientation, Vertex, VertexId, Weight};
pub use queue::{Candidate, EdgeQueue};
pub use union_find::UnionFind;
