// SPDX-License-Identifier: MIT OR Apache-2.0
#![no_main]

//! Fuzz test for Kruskal and Prim agreement.
//!
//! Builds an arbitrary undirected graph and checks that both algorithms
//! produce forests of the same weight and the expected size.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mst_engine::{Graph, UnionFind, VertexId, Weight};

#[derive(Debug, Arbitrary)]
struct FuzzEdge {
    from_mod: u8,
    to_mod: u8,
    weight: i16,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    isolated: Vec<u8>,
    edges: Vec<FuzzEdge>,
}

fuzz_target!(|input: FuzzInput| {
    // Limit graph size
    if input.edges.len() > 500 || input.isolated.len() > 64 {
        return;
    }

    let mut graph: Graph = Graph::undirected();
    for id in &input.isolated {
        graph.add_vertex(VertexId::from(*id % 64), "isolated", ());
    }
    for edge in &input.edges {
        graph.add_edge(
            VertexId::from(edge.from_mod % 64),
            VertexId::from(edge.to_mod % 64),
            Weight::from(edge.weight),
            (),
        );
    }

    let kruskal = graph.kruskal().expect("undirected graph");
    let components = graph.connected_components();

    // Invariant 1: a forest has one edge less than vertices per component
    assert_eq!(
        kruskal.edge_count() + components.len(),
        graph.vertex_count(),
        "kruskal forest has the wrong size"
    );
    assert_eq!(kruskal.tree_count, components.len());
    assert_eq!(graph.is_connected(), components.len() <= 1);

    // Invariant 2: accepted edges never close a cycle
    let mut uf = UnionFind::new();
    for edge in &kruskal.edges {
        assert!(uf.union(edge.from, edge.to), "kruskal accepted a cycle");
    }

    // Invariant 3: Prim from each component's smallest vertex matches the
    // per-component Kruskal weight
    let trees = graph.minimum_spanning_forest().expect("undirected graph");
    assert_eq!(trees.len(), components.len());
    for (members, tree) in components.iter().zip(&trees) {
        let prim = graph.prim(members[0]).expect("vertex exists");
        assert_eq!(prim.edge_count(), members.len() - 1);
        assert_eq!(
            prim.total_weight, tree.total_weight,
            "prim and kruskal disagree on component starting at {}",
            members[0]
        );
    }

    // Invariant 4: reruns are identical
    assert_eq!(graph.kruskal().expect("undirected graph"), kruskal);
});
