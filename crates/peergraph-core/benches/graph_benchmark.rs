//! Benchmarks for graph mutation and bounded-depth reachability.
//!
//! Measures:
//! - node + edge construction throughput
//! - `is_connected_within` on deep chains (worst-case round count)
//! - `is_connected_within` on random topologies (wide frontiers)
//! - `remove` on a hub node with many inbound edges (full-population scan)

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use peergraph_core::{Graph, NodeId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// =============================================================================
// Topology generators
// =============================================================================

fn build_chain(len: usize) -> (Graph<usize, usize>, Vec<NodeId>) {
    let mut graph = Graph::with_capacity(len);
    let ids: Vec<_> = (0..len).map(|i| graph.add(i, i)).collect();
    for pair in ids.windows(2) {
        graph.connect(pair[0], pair[1]).unwrap();
    }
    (graph, ids)
}

fn build_random(nodes: usize, edges: usize, seed: u64) -> (Graph<usize, usize>, Vec<NodeId>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::with_capacity(nodes);
    let ids: Vec<_> = (0..nodes).map(|i| graph.add(i, i)).collect();

    let mut added = 0;
    while added < edges {
        let from = ids[rng.gen_range(0..nodes)];
        let to = ids[rng.gen_range(0..nodes)];
        if graph.connect(from, to).is_ok() {
            added += 1;
        }
    }
    (graph, ids)
}

/// Star topology: every spoke points at the hub, worst case for removal.
fn build_hub(spokes: usize) -> Graph<usize, usize> {
    let mut graph = Graph::with_capacity(spokes + 1);
    let hub = graph.add(0, 0);
    for i in 1..=spokes {
        let spoke = graph.add(i, i);
        graph.connect(spoke, hub).unwrap();
    }
    graph
}

// =============================================================================
// Construction
// =============================================================================

fn bench_build_chain(c: &mut Criterion) {
    c.bench_function("graph_build_chain_1k", |b| {
        b.iter(|| black_box(build_chain(1_000)));
    });
}

// =============================================================================
// Bounded-depth reachability
// =============================================================================

fn bench_is_connected_chain(c: &mut Criterion) {
    let (graph, ids) = build_chain(1_024);
    let source = ids[0];
    let target = ids[ids.len() - 1];

    let mut group = c.benchmark_group("is_connected_chain_1k");
    for depth in [4_usize, 64, 1_024] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| black_box(graph.is_connected_within(source, target, depth)));
        });
    }
    group.finish();
}

fn bench_is_connected_random(c: &mut Criterion) {
    let (graph, ids) = build_random(2_000, 10_000, 42);
    let source = ids[0];
    let target = ids[ids.len() - 1];

    let mut group = c.benchmark_group("is_connected_random_2k");
    for depth in [1_usize, 2, 4] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| black_box(graph.is_connected_within(source, target, depth)));
        });
    }
    group.finish();
}

// =============================================================================
// Removal scan
// =============================================================================

fn bench_remove_hub(c: &mut Criterion) {
    c.bench_function("remove_hub_1k_inbound", |b| {
        b.iter_batched(
            || build_hub(1_000),
            |mut graph| {
                graph.remove(&0).unwrap();
                black_box(graph)
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_build_chain,
    bench_is_connected_chain,
    bench_is_connected_random,
    bench_remove_hub
);
criterion_main!(benches);
