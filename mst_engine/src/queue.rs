//! Min-priority queue of candidate edges for Prim's algorithm.

use std::{cmp::Ordering, collections::BinaryHeap};

use crate::graph::{EdgeIndex, EdgeRef, VertexId, Weight};

/// Candidate edge waiting in an [`EdgeQueue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub edge_index: EdgeIndex,
    pub from: VertexId,
    pub to: VertexId,
    pub weight: Weight,
    /// Push order within the owning queue.
    seq: u64,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap: lightest first, then lowest target id,
        // then earliest push.
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.to.cmp(&self.to))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Binary heap popping candidates in `(weight, target id, push order)` order.
///
/// The ordering is total, so the pop sequence never depends on heap internals.
#[derive(Debug, Default)]
pub struct EdgeQueue {
    heap: BinaryHeap<Candidate>,
    next_seq: u64,
}

impl EdgeQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<E>(&mut self, edge: EdgeRef<'_, E>) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Candidate {
            edge_index: edge.index,
            from: edge.from,
            to: edge.to,
            weight: edge.weight,
            seq,
        });
    }

    pub fn pop(&mut self) -> Option<Candidate> {
        self.heap.pop()
    }

    #[must_use]
    pub fn peek(&self) -> Option<&Candidate> {
        self.heap.peek()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<'g, E: 'g> Extend<EdgeRef<'g, E>> for EdgeQueue {
    fn extend<I: IntoIterator<Item = EdgeRef<'g, E>>>(&mut self, iter: I) {
        for edge in iter {
            self.push(edge);
        }
    }
}
