use std::fmt;
use std::str::FromStr;

use crate::algorithm::Distance;
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Work counters for one strategy run
///
/// `vertices_settled` counts selection rounds (array scan) or queue pops
/// (both queue strategies), stale pops included. `edges_relaxed` counts
/// relaxations that actually lowered a distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStatistics {
    pub vertices_settled: usize,
    pub edges_relaxed: usize,
}

/// The three interchangeable ways of running Dijkstra
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// O(V²) scan for the closest unvisited vertex each round
    ArrayScan,
    /// Queue seeded with the source only, stale entries re-scanned
    LazyQueue,
    /// Queue seeded with every vertex, re-insertion instead of decrease-key
    EagerQueue,
}

impl Strategy {
    /// Every strategy, in reporting order
    pub const ALL: [Strategy; 3] = [Strategy::ArrayScan, Strategy::LazyQueue, Strategy::EagerQueue];

    /// Short machine-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::ArrayScan => "array-scan",
            Strategy::LazyQueue => "lazy-queue",
            Strategy::EagerQueue => "eager-queue",
        }
    }

    /// Human readable description used in reports
    pub fn description(&self) -> &'static str {
        match self {
            Strategy::ArrayScan => "straightforward array-scan implementation",
            Strategy::LazyQueue => "priority-queue implementation seeded with the source only",
            Strategy::EagerQueue => "priority-queue implementation seeded with every vertex",
        }
    }

    /// Runs this strategy over `graph` from `source`
    pub fn run<W, G>(&self, graph: &G, source: usize) -> Result<StrategyRun<W>>
    where
        W: Weight,
        G: Graph<W> + ?Sized,
    {
        match self {
            Strategy::ArrayScan => crate::algorithm::run_array_scan(graph, source),
            Strategy::LazyQueue => crate::algorithm::run_lazy_queue(graph, source),
            Strategy::EagerQueue => crate::algorithm::run_eager_queue(graph, source),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown strategy name
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown strategy: {0} (expected array-scan, lazy-queue or eager-queue)")]
pub struct UnknownStrategy(pub String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "array-scan" | "dijkstra1" => Ok(Strategy::ArrayScan),
            "lazy-queue" | "first-dijkstra2" => Ok(Strategy::LazyQueue),
            "eager-queue" | "second-dijkstra2" => Ok(Strategy::EagerQueue),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}

/// Outcome of a single strategy run
///
/// Owns its distance array, visited set and counters; nothing is shared with
/// other runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyRun<W>
where
    W: Weight,
{
    strategy: Strategy,
    source: usize,
    distances: Vec<Distance<W>>,
    visited: Option<Vec<bool>>,
    statistics: RunStatistics,
}

impl<W> StrategyRun<W>
where
    W: Weight,
{
    pub(crate) fn new(
        strategy: Strategy,
        source: usize,
        distances: Vec<Distance<W>>,
        visited: Option<Vec<bool>>,
        statistics: RunStatistics,
    ) -> Self {
        StrategyRun {
            strategy,
            source,
            distances,
            visited,
            statistics,
        }
    }

    /// Strategy that produced this run
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Source vertex (0-based)
    pub fn source(&self) -> usize {
        self.source
    }

    /// Distance from the source to every vertex
    pub fn distances(&self) -> &[Distance<W>] {
        &self.distances
    }

    /// Distance to a single vertex, `None` if `vertex` is out of range
    pub fn distance(&self, vertex: usize) -> Option<Distance<W>> {
        self.distances.get(vertex).copied()
    }

    /// Visited set at termination, for the strategies that keep one
    pub fn visited(&self) -> Option<&[bool]> {
        self.visited.as_deref()
    }

    pub fn statistics(&self) -> RunStatistics {
        self.statistics
    }

    /// Number of vertices with a finite distance
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_finite()).count()
    }

    /// Splits the run into its distance array and counters
    pub fn into_parts(self) -> (Vec<Distance<W>>, RunStatistics) {
        (self.distances, self.statistics)
    }
}

/// Trait for shortest path strategies
pub trait ShortestPathStrategy<W, G>
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    /// Compute distances from a source vertex to all other vertices
    fn compute_distances(&self, graph: &G, source: usize) -> Result<StrategyRun<W>>;

    /// Get the name of the strategy
    fn name(&self) -> &'static str;
}

impl<W, G> ShortestPathStrategy<W, G> for Strategy
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    fn compute_distances(&self, graph: &G, source: usize) -> Result<StrategyRun<W>> {
        self.run(graph, source)
    }

    fn name(&self) -> &'static str {
        Strategy::name(self)
    }
}

/// Rejects a source that is not a vertex of `graph`
pub(crate) fn check_source<W, G>(graph: &G, source: usize) -> Result<()>
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    if graph.has_vertex(source) {
        Ok(())
    } else {
        Err(Error::OutOfRange {
            vertex: source,
            vertex_count: graph.vertex_count(),
        })
    }
}
