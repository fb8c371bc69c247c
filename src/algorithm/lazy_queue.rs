use log::{debug, trace};

use crate::algorithm::distance::{initial_distances, relax};
use crate::algorithm::traits::check_source;
use crate::algorithm::{Distance, RunStatistics, Strategy, StrategyRun};
use crate::data_structures::SnapshotQueue;
use crate::graph::{Graph, Weight};
use crate::Result;

/// Lazy-queue Dijkstra: only the source is queued up front
///
/// Each relaxation pushes a fresh `(vertex, distance)` snapshot and leaves any
/// older entry for that vertex in the queue. There is no visited set and no
/// staleness guard: every pop is counted as a settled vertex and its edges are
/// relaxed from the vertex's *live* distance, even when the popped snapshot is
/// already out of date. Those redundant passes never change a distance but do
/// show up in `vertices_settled`, which is what sets this strategy apart from
/// the eager one when comparing counters.
///
/// Whether skipping the staleness check was intended or an omission is an
/// open question; the behaviour is kept as is so the counters stay comparable.
///
/// Equal snapshots pop in whatever order [`SnapshotQueue`] yields them; that
/// tie order is implementation-defined.
pub fn run_lazy_queue<W, G>(graph: &G, source: usize) -> Result<StrategyRun<W>>
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    check_source(graph, source)?;

    let n = graph.vertex_count();
    let mut distances = initial_distances(n, source);
    let mut statistics = RunStatistics::default();

    let mut queue = SnapshotQueue::with_capacity(n);
    queue.push(source, Distance::zero());

    while let Some((u, snapshot)) = queue.pop() {
        statistics.vertices_settled += 1;

        if snapshot > distances[u] {
            trace!(
                "lazy queue popped stale entry for vertex {} ({} > {})",
                u, snapshot, distances[u]
            );
        }

        for edge in graph.edges_from(u)? {
            if let Some(improved) = relax(&mut distances, u, edge)? {
                queue.push(edge.destination(), improved);
                statistics.edges_relaxed += 1;
            }
        }
    }

    debug!(
        "lazy queue from {}: {} vertices settled, {} edges relaxed",
        source, statistics.vertices_settled, statistics.edges_relaxed
    );

    Ok(StrategyRun::new(
        Strategy::LazyQueue,
        source,
        distances,
        None,
        statistics,
    ))
}
