use log::{debug, trace};

use crate::algorithm::distance::{initial_distances, relax};
use crate::algorithm::traits::check_source;
use crate::algorithm::{Distance, RunStatistics, Strategy, StrategyRun};
use crate::graph::{Graph, Weight};
use crate::Result;

/// Array-scan Dijkstra: O(V²) selection plus O(E) relaxation
///
/// Runs exactly `vertex_count` rounds. Each round scans every vertex left to
/// right for the unvisited one with the smallest finite distance; the first
/// minimum wins, so ties go to the lowest index. A round that finds nothing
/// (the rest is unreachable) still counts as a settled vertex but relaxes no
/// edges.
pub fn run_array_scan<W, G>(graph: &G, source: usize) -> Result<StrategyRun<W>>
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    check_source(graph, source)?;

    let n = graph.vertex_count();
    let mut distances = initial_distances(n, source);
    let mut visited = vec![false; n];
    let mut statistics = RunStatistics::default();

    for round in 0..n {
        statistics.vertices_settled += 1;

        let Some(u) = find_min_vertex(&distances, &visited) else {
            trace!("array scan round {}: no reachable unvisited vertex", round);
            continue;
        };
        visited[u] = true;

        for edge in graph.edges_from(u)? {
            if relax(&mut distances, u, edge)?.is_some() {
                statistics.edges_relaxed += 1;
            }
        }
    }

    debug!(
        "array scan from {}: {} vertices settled, {} edges relaxed",
        source, statistics.vertices_settled, statistics.edges_relaxed
    );

    Ok(StrategyRun::new(
        Strategy::ArrayScan,
        source,
        distances,
        Some(visited),
        statistics,
    ))
}

/// Index of the unvisited vertex with the smallest finite distance
fn find_min_vertex<W: Weight>(distances: &[Distance<W>], visited: &[bool]) -> Option<usize> {
    let mut min_distance = Distance::Infinite;
    let mut min_vertex = None;

    for (vertex, (&distance, &seen)) in distances.iter().zip(visited).enumerate() {
        if !seen && distance < min_distance {
            min_distance = distance;
            min_vertex = Some(vertex);
        }
    }

    min_vertex
}
