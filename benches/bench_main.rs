use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use viator::{NodeId, RoadGraph, SpatialIndex, Time, astar, dijkstra, find_nearest_node};

fn street_grid(width: i64, height: i64) -> RoadGraph {
    let mut graph = RoadGraph::new();

    for row in 0..height {
        for col in 0..width {
            let id = row * width + col + 1;
            graph.add_node(id, 39.36 + row as f64 * 0.001, -74.42 + col as f64 * 0.001);
        }
    }

    for row in 0..height {
        for col in 0..width {
            let id = row * width + col + 1;
            let weight = |u: NodeId, v: NodeId| 10.0 + ((u * 31 + v * 17) % 7) as Time;
            if col + 1 < width {
                graph.add_edge(id, id + 1, weight(id, id + 1), None, true);
            }
            if row + 1 < height {
                graph.add_edge(id, id + width, weight(id, id + width), None, true);
            }
        }
    }

    graph
}

fn bench_searches(c: &mut Criterion) {
    let graph = street_grid(60, 60);
    let target = 60 * 60;

    c.bench_function("dijkstra 60x60 corner to corner", |b| {
        b.iter(|| dijkstra(black_box(&graph), 1, target, None))
    });
    c.bench_function("astar 60x60 corner to corner", |b| {
        b.iter(|| astar(black_box(&graph), 1, target, None))
    });
}

fn bench_nearest_node(c: &mut Criterion) {
    let graph = street_grid(60, 60);
    let index = SpatialIndex::build(&graph).unwrap();

    c.bench_function("nearest node exhaustive scan", |b| {
        b.iter(|| find_nearest_node(black_box(&graph), 39.39, -74.39))
    });
    c.bench_function("nearest node rtree", |b| {
        b.iter(|| index.nearest(black_box(39.39), black_box(-74.39)))
    });
}

criterion_group!(benches, bench_searches, bench_nearest_node);
criterion_main!(benches);
