// SPDX-License-Identifier: MIT OR Apache-2.0
#![no_main]

//! Fuzz test for UnionFind operations.
//!
//! Replays arbitrary make_set/union/find sequences against a naive
//! label-per-element model.

use std::collections::HashMap;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mst_engine::{UnionFind, VertexId};

#[derive(Debug, Arbitrary)]
enum FuzzOp {
    MakeSet { x: u8 },
    Union { a: u8, b: u8 },
    Find { x: u8 },
    Connected { a: u8, b: u8 },
}

fuzz_target!(|ops: Vec<FuzzOp>| {
    // Limit operation count
    if ops.len() > 1000 {
        return;
    }

    let mut uf = UnionFind::new();
    let mut labels: HashMap<VertexId, VertexId> = HashMap::new();

    for op in &ops {
        match op {
            FuzzOp::MakeSet { x } => {
                let x = VertexId::from(*x);
                let fresh = !labels.contains_key(&x);
                labels.entry(x).or_insert(x);
                assert_eq!(uf.make_set(x), fresh);
            },
            FuzzOp::Union { a, b } => {
                let (a, b) = (VertexId::from(*a), VertexId::from(*b));
                let la = *labels.entry(a).or_insert(a);
                let lb = *labels.entry(b).or_insert(b);
                let merged = uf.union(a, b);
                assert_eq!(merged, la != lb);
                if merged {
                    for label in labels.values_mut() {
                        if *label == lb {
                            *label = la;
                        }
                    }
                }
            },
            FuzzOp::Find { x } => {
                let x = VertexId::from(*x);
                labels.entry(x).or_insert(x);
                let root = uf.find(x);
                assert_eq!(uf.find(root), root);
            },
            FuzzOp::Connected { a, b } => {
                let (a, b) = (VertexId::from(*a), VertexId::from(*b));
                let la = *labels.entry(a).or_insert(a);
                let lb = *labels.entry(b).or_insert(b);
                assert_eq!(uf.connected(a, b), la == lb);
            },
        }
    }

    let mut distinct: Vec<VertexId> = labels.values().copied().collect();
    distinct.sort_unstable();
    distinct.dedup();
    assert_eq!(uf.set_count(), distinct.len());
    assert_eq!(uf.len(), labels.len());
});
