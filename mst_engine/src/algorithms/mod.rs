//! Spanning tree algorithms.
//!
//! - Minimum Spanning Tree / Forest (Kruskal's algorithm)
//! - Minimum Spanning Tree from a start vertex (lazy Prim)
//! - Connectivity, reachability and connected components

mod connectivity;
mod kruskal;
mod mst;
mod prim;

pub use mst::{MstEdge, MstResult};
