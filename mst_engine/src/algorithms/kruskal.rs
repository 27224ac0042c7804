//! Minimum spanning tree using Kruskal's algorithm.
//!
//! Sorts the global edge sequence by weight and greedily merges components
//! with a [`UnionFind`]. On a disconnected graph the result is a minimum
//! spanning forest.

use std::collections::HashMap;

use tracing::{debug, instrument};

use super::mst::{require_undirected, MstEdge, MstResult};
use crate::{
    graph::{add_weight, EdgeIndex, VertexId},
    Graph, MstConfig, Result, UnionFind,
};

impl<V, E> Graph<V, E> {
    /// Compute the minimum spanning tree (or forest) with default settings.
    ///
    /// Time complexity: O(E log E) for sorting edges.
    ///
    /// # Errors
    ///
    /// Returns [`MstError::InvalidOperation`](crate::MstError::InvalidOperation)
    /// on a directed graph.
    pub fn kruskal(&self) -> Result<MstResult> {
        self.kruskal_with_config(&MstConfig::default())
    }

    /// Compute the minimum spanning tree (or forest) using Kruskal's algorithm.
    ///
    /// Edges of equal weight are taken in insertion order, so the output is
    /// reproducible. Accepted edges are returned in that sorted order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperation` on a directed graph, `WeightOverflow` when the
    /// tree weight leaves the range of [`Weight`](crate::Weight), and
    /// `NotSpanning` when `config.require_spanning` is set and the graph is
    /// disconnected.
    #[instrument(skip(self, config), fields(vertices = self.vertex_count(), edges = self.edge_count()))]
    pub fn kruskal_with_config(&self, config: &MstConfig) -> Result<MstResult> {
        require_undirected(self, "kruskal")?;

        let vertex_count = self.vertex_count();
        let target = vertex_count.saturating_sub(1);

        // (weight, insertion index) is a total order over the edge sequence
        let mut sorted: Vec<EdgeIndex> = (0..self.edge_count()).collect();
        let edges = self.edges();
        sorted.sort_unstable_by_key(|&index| (edges[index].weight(), index));

        let mut uf = UnionFind::from_elements(self.vertices().map(|v| v.id()));
        let mut accepted = Vec::with_capacity(target);
        let mut total_weight = 0;

        for index in sorted {
            if config.early_termination && accepted.len() == target {
                break;
            }
            let edge = &edges[index];
            if uf.union(edge.from(), edge.to()) {
                accepted.push(MstEdge {
                    edge_index: index,
                    from: edge.from(),
                    to: edge.to(),
                    weight: edge.weight(),
                });
                total_weight = add_weight(total_weight, edge.weight())?;
            }
        }

        debug!(
            accepted = accepted.len(),
            total_weight,
            trees = uf.set_count(),
            "kruskal finished"
        );

        MstResult {
            edges: accepted,
            total_weight,
            vertex_count,
            tree_count: uf.set_count(),
        }
        .finish("kruskal", config)
    }

    /// Split the minimum spanning forest into one tree per connected component.
    ///
    /// Trees are ordered by their smallest vertex identity. Isolated vertices
    /// produce a tree with no edges.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperation` on a directed graph and `WeightOverflow` when
    /// a tree weight leaves the range of [`Weight`](crate::Weight).
    pub fn minimum_spanning_forest(&self) -> Result<Vec<MstResult>> {
        let forest = self.kruskal()?;

        let mut uf = UnionFind::from_elements(self.vertices().map(|v| v.id()));
        for edge in &forest.edges {
            uf.union(edge.from, edge.to);
        }

        let mut slots: HashMap<VertexId, usize> = HashMap::new();
        let mut trees: Vec<MstResult> = Vec::with_capacity(forest.tree_count);
        for id in self.vertex_ids() {
            let root = uf.find(id);
            let slot = *slots.entry(root).or_insert_with(|| {
                trees.push(MstResult {
                    tree_count: 1,
                    ..MstResult::empty()
                });
                trees.len() - 1
            });
            trees[slot].vertex_count += 1;
        }

        for edge in forest.edges {
            let root = uf.find(edge.from);
            if let Some(&slot) = slots.get(&root) {
                let tree = &mut trees[slot];
                tree.total_weight = add_weight(tree.total_weight, edge.weight)?;
                tree.edges.push(edge);
            }
        }

        Ok(trees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MstError, Weight};

    fn graph_from(edges: &[(VertexId, VertexId, i64)]) -> Graph {
        let mut graph = Graph::undirected();
        for &(from, to, weight) in edges {
            graph.add_edge(from, to, weight, ());
        }
        graph
    }

    #[test]
    fn test_kruskal_empty_graph() {
        let graph: Graph = Graph::undirected();
        let result = graph.kruskal().unwrap();
        assert!(result.edges.is_empty());
        assert_eq!(result.total_weight, 0);
        assert_eq!(result.tree_count, 0);
    }

    #[test]
    fn test_kruskal_single_vertex() {
        let mut graph: Graph = Graph::undirected();
        graph.add_vertex(1, "A", ());
        let result = graph.kruskal().unwrap();
        assert!(result.edges.is_empty());
        assert_eq!(result.tree_count, 1);
        assert!(result.is_spanning_tree());
    }

    #[test]
    fn test_kruskal_triangle() {
        let graph = graph_from(&[(0, 1, 4), (1, 2, 2), (0, 2, 3)]);
        let result = graph.kruskal().unwrap();

        let picked: Vec<_> = result.edges.iter().map(|e| (e.from, e.to, e.weight)).collect();
        assert_eq!(picked, vec![(1, 2, 2), (0, 2, 3)]);
        assert_eq!(result.total_weight, 5);
        assert_eq!(result.tree_count, 1);
    }

    #[test]
    fn test_kruskal_equal_weights_follow_insertion_order() {
        let graph = graph_from(&[(0, 1, 1), (1, 2, 1), (0, 2, 1)]);
        let result = graph.kruskal().unwrap();
        let indices: Vec<_> = result.edges.iter().map(|e| e.edge_index).collect();
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn test_kruskal_skips_self_loops_and_heavier_parallels() {
        let graph = graph_from(&[(0, 0, -5), (0, 1, 9), (0, 1, 2)]);
        let result = graph.kruskal().unwrap();
        assert_eq!(result.edge_count(), 1);
        assert_eq!(result.edges[0].edge_index, 2);
        assert_eq!(result.total_weight, 2);
    }

    #[test]
    fn test_kruskal_forest() {
        let graph = graph_from(&[(0, 1, 1), (2, 3, 2)]);
        let result = graph.kruskal().unwrap();
        assert_eq!(result.edge_count(), 2);
        assert_eq!(result.tree_count, 2);
        assert!(!result.is_spanning_tree());
    }

    #[test]
    fn test_kruskal_require_spanning() {
        let graph = graph_from(&[(0, 1, 1), (2, 3, 2)]);
        let err = graph
            .kruskal_with_config(&MstConfig::new().require_spanning(true))
            .unwrap_err();
        assert_eq!(
            err,
            MstError::NotSpanning {
                accepted: 2,
                required: 3
            }
        );
    }

    #[test]
    fn test_kruskal_weight_overflow_is_an_error() {
        let graph = graph_from(&[(0, 1, Weight::MAX), (1, 2, 1)]);
        assert_eq!(
            graph.kruskal().unwrap_err(),
            MstError::WeightOverflow {
                total: 1,
                weight: Weight::MAX
            }
        );
        assert!(graph.minimum_spanning_forest().is_err());

        let graph = graph_from(&[(0, 1, Weight::MAX), (1, 2, -1)]);
        assert_eq!(graph.kruskal().unwrap().total_weight, Weight::MAX - 1);
    }

    #[test]
    fn test_kruskal_without_early_termination_matches() {
        let graph = graph_from(&[(0, 1, 1), (1, 2, 2), (0, 2, 3), (2, 3, 1), (1, 3, 7)]);
        let fast = graph.kruskal().unwrap();
        let full = graph
            .kruskal_with_config(&MstConfig::new().early_termination(false))
            .unwrap();
        assert_eq!(fast, full);
    }

    #[test]
    fn test_kruskal_rejects_directed() {
        let mut graph: Graph = Graph::directed();
        graph.add_edge(0, 1, 1, ());
        assert_eq!(
            graph.kruskal().unwrap_err(),
            MstError::InvalidOperation {
                algorithm: "kruskal"
            }
        );
    }

    #[test]
    fn test_forest_split() {
        let mut graph = graph_from(&[(4, 5, 2), (0, 1, 1), (1, 2, 3), (0, 2, 9)]);
        graph.add_vertex(3, "lonely", ());

        let trees = graph.minimum_spanning_forest().unwrap();
        assert_eq!(trees.len(), 3);

        assert_eq!(trees[0].vertex_count, 3);
        assert_eq!(trees[0].total_weight, 4);
        assert_eq!(trees[0].edge_count(), 2);

        assert_eq!(trees[1].vertex_count, 1);
        assert!(trees[1].edges.is_empty());

        assert_eq!(trees[2].vertex_count, 2);
        assert_eq!(trees[2].total_weight, 2);
        assert!(trees.iter().all(MstResult::is_spanning_tree));
        assert!(trees.iter().all(|t| t.tree_count == 1));
    }

    #[test]
    fn test_forest_of_connected_graph_is_single_tree() {
        let graph = graph_from(&[(0, 1, 4), (1, 2, 2), (0, 2, 3)]);
        let trees = graph.minimum_spanning_forest().unwrap();
        assert_eq!(trees.len(), 1);
        assert_eq!(trees[0].total_weight, 5);
    }
}
