// SPDX-License-Identifier: MIT OR Apache-2.0
#![allow(missing_docs)]
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mst_engine::{Graph, MstConfig, Weight};

fn chain(size: u64) -> Graph {
    let mut graph = Graph::undirected();
    for i in 0..size - 1 {
        graph.add_edge(i, i + 1, (i + 1) as Weight, ());
    }
    graph
}

/// Square grid with weights derived from the cell position.
fn grid(side: u64) -> Graph {
    let mut graph = Graph::undirected();
    for row in 0..side {
        for col in 0..side {
            let id = row * side + col;
            if col + 1 < side {
                graph.add_edge(id, id + 1, ((id * 7) % 13) as Weight, ());
            }
            if row + 1 < side {
                graph.add_edge(id, id + side, ((id * 11) % 17) as Weight, ());
            }
        }
    }
    graph
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for side in [10, 50, 100].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(side), side, |b, &side| {
            b.iter(|| black_box(grid(side)));
        });
    }

    group.finish();
}

fn bench_kruskal(c: &mut Criterion) {
    let mut group = c.benchmark_group("kruskal");

    group.bench_function("chain_100", |b| {
        let graph = chain(100);
        b.iter(|| black_box(graph.kruskal().unwrap()));
    });

    for side in [10, 50, 100].iter() {
        let graph = grid(*side);
        group.bench_with_input(BenchmarkId::new("grid", side), &graph, |b, graph| {
            b.iter(|| black_box(graph.kruskal().unwrap()));
        });
    }

    let graph = grid(100);
    group.bench_function("grid_100_no_early_exit", |b| {
        let config = MstConfig::new().early_termination(false);
        b.iter(|| black_box(graph.kruskal_with_config(&config).unwrap()));
    });

    group.finish();
}

fn bench_prim(c: &mut Criterion) {
    let mut group = c.benchmark_group("prim");

    group.bench_function("chain_100", |b| {
        let graph = chain(100);
        b.iter(|| black_box(graph.prim(0).unwrap()));
    });

    for side in [10, 50, 100].iter() {
        let graph = grid(*side);
        group.bench_with_input(BenchmarkId::new("grid", side), &graph, |b, graph| {
            b.iter(|| black_box(graph.prim(0).unwrap()));
        });
    }

    group.finish();
}

fn bench_connectivity(c: &mut Criterion) {
    let mut group = c.benchmark_group("connectivity");

    let graph = grid(100);
    group.bench_function("is_connected_grid_100", |b| {
        b.iter(|| black_box(graph.is_connected()));
    });
    group.bench_function("components_grid_100", |b| {
        b.iter(|| black_box(graph.connected_components()));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_kruskal,
    bench_prim,
    bench_connectivity
);
criterion_main!(benches);
