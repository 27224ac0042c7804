//! Disjoint-set forest with path compression and union by rank.

use std::{cmp::Ordering, collections::HashMap};

use crate::graph::VertexId;

/// Union-Find over vertex identities.
///
/// Merge policy is fixed so union sequences are reproducible: the root with
/// the lower rank goes under the other one, and on a rank tie the second
/// argument's root goes under the first's, whose rank then grows by one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnionFind {
    parent: HashMap<VertexId, VertexId>,
    rank: HashMap<VertexId, u32>,
    sets: usize,
}

impl UnionFind {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a structure holding one singleton set per element.
    pub fn from_elements(elements: impl IntoIterator<Item = VertexId>) -> Self {
        let mut uf = Self::new();
        for element in elements {
            uf.make_set(element);
        }
        uf
    }

    /// Register `x` as a singleton set. Returns false if it was already known.
    pub fn make_set(&mut self, x: VertexId) -> bool {
        if self.parent.contains_key(&x) {
            return false;
        }
        self.parent.insert(x, x);
        self.rank.insert(x, 0);
        self.sets += 1;
        true
    }

    /// Root of the set containing `x`, compressing the path on the way.
    ///
    /// Unknown elements are registered as singletons first.
    pub fn find(&mut self, x: VertexId) -> VertexId {
        self.make_set(x);

        let mut root = x;
        loop {
            let parent = self.parent.get(&root).copied().unwrap_or(root);
            if parent == root {
                break;
            }
            root = parent;
        }

        let mut node = x;
        while node != root {
            node = self.parent.insert(node, root).unwrap_or(root);
        }
        root
    }

    /// Merge the sets containing `a` and `b`.
    ///
    /// Returns false without merging when both are already in the same set.
    pub fn union(&mut self, a: VertexId, b: VertexId) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }

        let rank_a = self.rank.get(&ra).copied().unwrap_or(0);
        let rank_b = self.rank.get(&rb).copied().unwrap_or(0);

        match rank_a.cmp(&rank_b) {
            Ordering::Less => {
                self.parent.insert(ra, rb);
            },
            Ordering::Greater => {
                self.parent.insert(rb, ra);
            },
            Ordering::Equal => {
                self.parent.insert(rb, ra);
                self.rank.insert(ra, rank_a + 1);
            },
        }
        self.sets -= 1;
        true
    }

    pub fn connected(&mut self, a: VertexId, b: VertexId) -> bool {
        self.find(a) == self.find(b)
    }

    /// Number of registered elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets.
    #[must_use]
    pub const fn set_count(&self) -> usize {
        self.sets
    }
}
