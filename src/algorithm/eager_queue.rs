use log::{debug, trace};

use crate::algorithm::distance::{initial_distances, relax};
use crate::algorithm::traits::check_source;
use crate::algorithm::{RunStatistics, Strategy, StrategyRun};
use crate::data_structures::SnapshotQueue;
use crate::graph::{Graph, Weight};
use crate::Result;

/// Eager-queue Dijkstra: every vertex is queued before the loop starts
///
/// The source goes in at zero and everything else at infinity, as in the
/// textbook formulation. Decrease-key is approximated by pushing a new
/// snapshot on every successful relaxation, so a vertex's first pop carries
/// its final distance and later pops of the same vertex are stale duplicates.
/// Those are still counted and still relax their edges; the relaxations fail
/// because the distances are already optimal.
pub fn run_eager_queue<W, G>(graph: &G, source: usize) -> Result<StrategyRun<W>>
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    check_source(graph, source)?;

    let n = graph.vertex_count();
    let mut distances = initial_distances(n, source);
    let mut visited = vec![false; n];
    let mut statistics = RunStatistics::default();

    let mut queue: SnapshotQueue<usize, _> = distances.iter().copied().enumerate().collect();

    while let Some((u, _)) = queue.pop() {
        statistics.vertices_settled += 1;

        if visited[u] {
            trace!("eager queue popped duplicate entry for settled vertex {}", u);
        }
        visited[u] = true;

        for edge in graph.edges_from(u)? {
            if let Some(improved) = relax(&mut distances, u, edge)? {
                queue.push(edge.destination(), improved);
                statistics.edges_relaxed += 1;
            }
        }
    }

    debug!(
        "eager queue from {}: {} vertices settled, {} edges relaxed",
        source, statistics.vertices_settled, statistics.edges_relaxed
    );

    Ok(StrategyRun::new(
        Strategy::EagerQueue,
        source,
        distances,
        Some(visited),
        statistics,
    ))
}
