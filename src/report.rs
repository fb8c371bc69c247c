//! Side-by-side runs of all three strategies and their textual reports
//!
//! Comparison lives outside the strategies themselves: each run stays
//! independent and this module only collects and prints the results.

use std::io::{self, Write};

use crate::algorithm::{Distance, Strategy, StrategyRun};
use crate::graph::{Graph, Weight};
use crate::Result;

/// The results of every strategy over one graph and source
#[derive(Debug, Clone)]
pub struct StrategyComparison<W>
where
    W: Weight,
{
    runs: Vec<StrategyRun<W>>,
}

impl<W> StrategyComparison<W>
where
    W: Weight,
{
    /// Runs the three strategies one after the other
    pub fn run<G>(graph: &G, source: usize) -> Result<Self>
    where
        G: Graph<W> + ?Sized,
    {
        let runs = Strategy::ALL
            .iter()
            .map(|strategy| strategy.run(graph, source))
            .collect::<Result<Vec<_>>>()?;
        Ok(StrategyComparison { runs })
    }

    /// Runs the three strategies concurrently on the rayon pool
    ///
    /// The graph is only read, so the runs cannot interfere; the results are
    /// identical to [`StrategyComparison::run`].
    pub fn run_parallel<G>(graph: &G, source: usize) -> Result<Self>
    where
        G: Graph<W> + ?Sized,
    {
        let (array_scan, (lazy_queue, eager_queue)) = rayon::join(
            || Strategy::ArrayScan.run(graph, source),
            || {
                rayon::join(
                    || Strategy::LazyQueue.run(graph, source),
                    || Strategy::EagerQueue.run(graph, source),
                )
            },
        );

        Ok(StrategyComparison {
            runs: vec![array_scan?, lazy_queue?, eager_queue?],
        })
    }

    /// Runs in [`Strategy::ALL`] order
    pub fn runs(&self) -> &[StrategyRun<W>] {
        &self.runs
    }

    /// The run of one strategy
    pub fn get(&self, strategy: Strategy) -> Option<&StrategyRun<W>> {
        self.runs.iter().find(|run| run.strategy() == strategy)
    }

    /// True when every strategy produced the same distance array
    pub fn distances_agree(&self) -> bool {
        self.runs
            .windows(2)
            .all(|pair| pair[0].distances() == pair[1].distances())
    }

    /// Vertices whose distance differs between at least two strategies
    pub fn disagreements(&self) -> Vec<usize> {
        let Some(first) = self.runs.first() else {
            return Vec::new();
        };

        (0..first.distances().len())
            .filter(|&vertex| {
                self.runs
                    .iter()
                    .any(|run| run.distance(vertex) != first.distance(vertex))
            })
            .collect()
    }

    /// Writes one report per strategy
    pub fn write_report<O: Write + ?Sized>(&self, out: &mut O) -> io::Result<()> {
        for run in &self.runs {
            writeln!(
                out,
                "Shortest paths with the {} ({}):",
                run.strategy().description(),
                run.strategy()
            )?;
            writeln!(out)?;
            write_run(run, out)?;
            writeln!(out)?;
        }
        Ok(())
    }
}

/// Writes the counters and distance list of a single run
///
/// Vertices are printed 0-based as `distN: value`, unreachable ones as
/// `Infinity`.
pub fn write_run<W, O>(run: &StrategyRun<W>, out: &mut O) -> io::Result<()>
where
    W: Weight,
    O: Write + ?Sized,
{
    let statistics = run.statistics();
    writeln!(out, "Total number of vertices visited: {}", statistics.vertices_settled)?;
    writeln!(out, "Total number of edges visited: {}", statistics.edges_relaxed)?;
    for (vertex, distance) in run.distances().iter().enumerate() {
        writeln!(out, "dist{}: {}", vertex, distance)?;
    }
    Ok(())
}

/// Renders a distance array as `[0, 1, Infinity]`
pub fn format_distances<W: Weight>(distances: &[Distance<W>]) -> String {
    let parts: Vec<String> = distances.iter().map(ToString::to_string).collect();
    format!("[{}]", parts.join(", "))
}
