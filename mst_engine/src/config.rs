//! Configuration for graphs and spanning tree computation.

use serde::{Deserialize, Serialize};

/// Construction-time configuration for a [`Graph`](crate::Graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Whether edges are one-way. Spanning tree algorithms reject directed graphs.
    pub directed: bool,
    /// Number of vertices to reserve space for up front.
    pub vertex_capacity: usize,
    /// Number of edges to reserve space for up front.
    pub edge_capacity: usize,
}

impl GraphConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    #[must_use]
    pub const fn vertex_capacity(mut self, capacity: usize) -> Self {
        self.vertex_capacity = capacity;
        self
    }

    #[must_use]
    pub const fn edge_capacity(mut self, capacity: usize) -> Self {
        self.edge_capacity = capacity;
        self
    }
}

/// Configuration for Kruskal and Prim runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MstConfig {
    /// Fail with [`MstError::NotSpanning`](crate::MstError::NotSpanning) instead of
    /// returning a forest or a partial tree.
    pub require_spanning: bool,
    /// Stop as soon as `vertex_count - 1` edges have been accepted.
    pub early_termination: bool,
}

impl Default for MstConfig {
    fn default() -> Self {
        Self {
            require_spanning: false,
            early_termination: true,
        }
    }
}

impl MstConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn require_spanning(mut self, require: bool) -> Self {
        self.require_spanning = require;
        self
    }

    #[must_use]
    pub const fn early_termination(mut self, enabled: bool) -> Self {
        self.early_termination = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graph_config_defaults_to_undirected() {
        let config = GraphConfig::default();
        assert!(!config.directed);
        assert_eq!(config.vertex_capacity, 0);
        assert_eq!(config.edge_capacity, 0);
    }

    #[test]
    fn graph_config_builder() {
        let config = GraphConfig::new()
            .directed(true)
            .vertex_capacity(16)
            .edge_capacity(64);
        assert!(config.directed);
        assert_eq!(config.vertex_capacity, 16);
        assert_eq!(config.edge_capacity, 64);
    }

    #[test]
    fn mst_config_defaults() {
        let config = MstConfig::default();
        assert!(!config.require_spanning);
        assert!(config.early_termination);
    }

    #[test]
    fn mst_config_builder() {
        let config = MstConfig::new()
            .require_spanning(true)
            .early_termination(false);
        assert!(config.require_spanning);
        assert!(!config.early_termination);
    }
}
