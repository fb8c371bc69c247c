use crate::graph::{DirectedGraph, Edge};
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a random directed graph with about `edges_per_vertex * n` edges
///
/// Weights are drawn from `1..=max_weight`. Self-loops are skipped, so the
/// actual edge count can be slightly lower than requested. The same seed
/// always yields the same graph.
pub fn generate_random(
    n: usize,
    edges_per_vertex: usize,
    max_weight: u64,
    seed: u64,
) -> DirectedGraph<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut adjacency: Vec<Vec<Edge<u64>>> = vec![Vec::new(); n];
    let max_weight = max_weight.max(1);

    if n > 1 {
        for _ in 0..n * edges_per_vertex {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            if u != v {
                adjacency[u].push(Edge::new(v, rng.gen_range(1..=max_weight)));
            }
        }
    }

    DirectedGraph::from_checked_adjacency(adjacency)
}

/// Generates a width x height grid with edges to the right and downwards
///
/// Vertex `(x, y)` has index `y * width + x`. Weights are random in
/// `1..=max_weight`, so many equal-length paths compete.
pub fn generate_grid(width: usize, height: usize, max_weight: u64, seed: u64) -> DirectedGraph<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = width * height;
    let mut adjacency: Vec<Vec<Edge<u64>>> = vec![Vec::new(); n];
    let max_weight = max_weight.max(1);

    for y in 0..height {
        for x in 0..width {
            let v = y * width + x;
            if x + 1 < width {
                adjacency[v].push(Edge::new(v + 1, rng.gen_range(1..=max_weight)));
            }
            if y + 1 < height {
                adjacency[v].push(Edge::new(v + width, rng.gen_range(1..=max_weight)));
            }
        }
    }

    DirectedGraph::from_checked_adjacency(adjacency)
}

/// Generates a unit-weight chain `0 -> 1 -> ... -> n-1` plus heavy edges from vertex 0
///
/// Every vertex past the second also gets a direct edge from vertex 0 that the
/// chain later beats, so the queue strategies accumulate stale entries.
pub fn generate_shortcut_chain(n: usize) -> DirectedGraph<u64> {
    let mut adjacency: Vec<Vec<Edge<u64>>> = vec![Vec::new(); n];

    for v in 1..n {
        adjacency[v - 1].push(Edge::new(v, 1));
    }
    for v in 2..n {
        adjacency[0].push(Edge::new(v, (n * 2) as u64));
    }

    DirectedGraph::from_checked_adjacency(adjacency)
}
