//! Reachability and connected components.

use std::collections::{BTreeMap, HashSet};

use tracing::debug;

use crate::{graph::VertexId, Graph, MstError, Result, UnionFind};

impl<V, E> Graph<V, E> {
    /// Whether every vertex is reachable from the smallest vertex identity.
    ///
    /// Walks the adjacency relation, so on a directed graph only outgoing
    /// edges are followed. An empty graph counts as connected.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        let Some(start) = self.min_vertex_id() else {
            return true;
        };
        let reached = self.depth_first(start).len();
        debug!(start, reached, total = self.vertex_count(), "connectivity check");
        reached == self.vertex_count()
    }

    /// Vertices reachable from `start`, in depth-first visit order.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when `start` is not a vertex of the graph.
    pub fn reachable_from(&self, start: VertexId) -> Result<Vec<VertexId>> {
        if !self.contains_vertex(start) {
            return Err(MstError::NotFound(start));
        }
        Ok(self.depth_first(start))
    }

    /// Weakly connected components, each sorted, ordered by smallest member.
    #[must_use]
    pub fn connected_components(&self) -> Vec<Vec<VertexId>> {
        let mut uf = UnionFind::from_elements(self.vertices().map(|v| v.id()));
        for edge in self.edges() {
            uf.union(edge.from(), edge.to());
        }

        let mut by_root: BTreeMap<VertexId, Vec<VertexId>> = BTreeMap::new();
        for id in self.vertex_ids() {
            by_root.entry(uf.find(id)).or_default().push(id);
        }

        let mut components: Vec<Vec<VertexId>> = by_root.into_values().collect();
        components.sort_unstable_by_key(|members| members[0]);
        components
    }

    fn depth_first(&self, start: VertexId) -> Vec<VertexId> {
        let mut visited: HashSet<VertexId> = HashSet::with_capacity(self.vertex_count());
        let mut order = Vec::new();
        let mut stack = vec![start];

        while let Some(id) = stack.pop() {
            if !visited.insert(id) {
                continue;
            }
            order.push(id);

            // Reverse so neighbors are visited in adjacency order.
            let pending: Vec<VertexId> = self
                .neighbors(id)
                .filter(|next| !visited.contains(next))
                .collect();
            stack.extend(pending.into_iter().rev());
        }

        order
    }
}
