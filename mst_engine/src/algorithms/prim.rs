//! Minimum spanning tree using lazy Prim.
//!
//! Grows a single tree from a start vertex. Stale queue entries (whose target
//! has already been reached) are discarded when popped rather than removed
//! eagerly.

use std::collections::HashSet;

use tracing::{debug, instrument};

use super::mst::{require_undirected, MstEdge, MstResult};
use crate::{
    graph::{add_weight, VertexId},
    EdgeQueue, Graph, MstConfig, MstError, Result,
};

impl<V, E> Graph<V, E> {
    /// Compute the minimum spanning tree reachable from `start` with default settings.
    ///
    /// Time complexity: O(E log E).
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperation` on a directed graph and `NotFound` when
    /// `start` is not a vertex of the graph.
    pub fn prim(&self, start: VertexId) -> Result<MstResult> {
        self.prim_with_config(start, &MstConfig::default())
    }

    /// Compute the minimum spanning tree reachable from `start` using Prim's algorithm.
    ///
    /// Edges are returned in acceptance order, oriented from the tree side to
    /// the newly reached vertex. If `start`'s component is smaller than the
    /// graph, the result only covers that component.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperation` on a directed graph, `NotFound` for an
    /// unknown `start`, `WeightOverflow` when the tree weight leaves the range
    /// of [`Weight`](crate::Weight), and `NotSpanning` when
    /// `config.require_spanning` is set and the tree cannot reach every vertex.
    #[instrument(skip(self, config), fields(vertices = self.vertex_count(), edges = self.edge_count()))]
    pub fn prim_with_config(&self, start: VertexId, config: &MstConfig) -> Result<MstResult> {
        require_undirected(self, "prim")?;
        if !self.contains_vertex(start) {
            return Err(MstError::NotFound(start));
        }

        let vertex_count = self.vertex_count();
        let target = vertex_count - 1;

        let mut visited: HashSet<VertexId> = HashSet::with_capacity(vertex_count);
        let mut queue = EdgeQueue::new();
        let mut accepted = Vec::with_capacity(target);
        let mut total_weight = 0;

        visited.insert(start);
        queue.extend(self.edges_from(start).filter(|e| e.to != start));

        while !(config.early_termination && accepted.len() == target) {
            let Some(candidate) = queue.pop() else {
                break;
            };
            if !visited.insert(candidate.to) {
                continue;
            }

            accepted.push(MstEdge {
                edge_index: candidate.edge_index,
                from: candidate.from,
                to: candidate.to,
                weight: candidate.weight,
            });
            total_weight = add_weight(total_weight, candidate.weight)?;

            queue.extend(
                self.edges_from(candidate.to)
                    .filter(|e| !visited.contains(&e.to)),
            );
        }

        debug!(
            start,
            accepted = accepted.len(),
            total_weight,
            reached = visited.len(),
            "prim finished"
        );

        MstResult {
            edges: accepted,
            total_weight,
            vertex_count,
            tree_count: 1,
        }
        .finish("prim", config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Weight;

    fn graph_from(edges: &[(VertexId, VertexId, i64)]) -> Graph {
        let mut graph = Graph::undirected();
        for &(from, to, weight) in edges {
            graph.add_edge(from, to, weight, ());
        }
        graph
    }

    #[test]
    fn test_prim_triangle() {
        let graph = graph_from(&[(0, 1, 4), (1, 2, 2), (0, 2, 3)]);
        let result = graph.prim(0).unwrap();

        let picked: Vec<_> = result.edges.iter().map(|e| (e.from, e.to, e.weight)).collect();
        assert_eq!(picked, vec![(0, 2, 3), (2, 1, 2)]);
        assert_eq!(result.total_weight, 5);
    }

    #[test]
    fn test_prim_single_vertex() {
        let mut graph: Graph = Graph::undirected();
        graph.add_vertex(3, "solo", ());
        let result = graph.prim(3).unwrap();
        assert!(result.edges.is_empty());
        assert!(result.is_spanning_tree());
    }

    #[test]
    fn test_prim_unknown_start() {
        let graph = graph_from(&[(0, 1, 1)]);
        assert_eq!(graph.prim(9).unwrap_err(), MstError::NotFound(9));

        let empty: Graph = Graph::undirected();
        assert_eq!(empty.prim(0).unwrap_err(), MstError::NotFound(0));
    }

    #[test]
    fn test_prim_rejects_directed() {
        let mut graph: Graph = Graph::directed();
        graph.add_edge(0, 1, 1, ());
        assert_eq!(
            graph.prim(0).unwrap_err(),
            MstError::InvalidOperation { algorithm: "prim" }
        );
    }

    #[test]
    fn test_prim_ties_prefer_lower_target() {
        let graph = graph_from(&[(0, 5, 1), (0, 3, 1), (0, 4, 1)]);
        let result = graph.prim(0).unwrap();
        let targets: Vec<_> = result.edges.iter().map(|e| e.to).collect();
        assert_eq!(targets, vec![3, 4, 5]);
    }

    #[test]
    fn test_prim_partial_tree_stays_in_component() {
        let graph = graph_from(&[(0, 1, 1), (1, 2, 1), (3, 4, 1)]);
        let result = graph.prim(3).unwrap();
        assert_eq!(result.edge_count(), 1);
        assert_eq!(result.vertices(), vec![3, 4]);
        assert!(!result.is_spanning_tree());

        let err = graph
            .prim_with_config(3, &MstConfig::new().require_spanning(true))
            .unwrap_err();
        assert_eq!(
            err,
            MstError::NotSpanning {
                accepted: 1,
                required: 4
            }
        );
    }

    #[test]
    fn test_prim_weight_overflow_is_an_error() {
        let graph = graph_from(&[(0, 1, Weight::MAX), (1, 2, 1)]);
        assert_eq!(
            graph.prim(0).unwrap_err(),
            MstError::WeightOverflow {
                total: Weight::MAX,
                weight: 1
            }
        );
        // The overflowing edge is never accepted from this side.
        let graph = graph_from(&[(0, 1, Weight::MAX), (1, 2, 1), (0, 2, 5)]);
        assert_eq!(graph.prim(2).unwrap().total_weight, 6);
    }

    #[test]
    fn test_prim_ignores_self_loops() {
        let graph = graph_from(&[(0, 0, -10), (0, 1, 5), (1, 1, -3)]);
        let result = graph.prim(0).unwrap();
        assert_eq!(result.edge_count(), 1);
        assert_eq!(result.total_weight, 5);
    }

    #[test]
    fn test_prim_without_early_termination_matches() {
        let graph = graph_from(&[(0, 1, 4), (0, 2, 2), (1, 2, 1), (1, 3, 5), (2, 3, 8)]);
        let fast = graph.prim(1).unwrap();
        let full = graph
            .prim_with_config(1, &MstConfig::new().early_termination(false))
            .unwrap();
        assert_eq!(fast, full);
    }
}
