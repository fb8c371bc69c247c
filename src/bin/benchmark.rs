use std::time::{Duration, Instant};

use dijkstra_strategies::graph::generators::{generate_grid, generate_random, generate_shortcut_chain};
use dijkstra_strategies::{DirectedGraph, Graph, RunStatistics, ShortestPathStrategy, Strategy};

// Function to benchmark a strategy on a graph
fn benchmark_strategy<A>(
    strategy: &A,
    graph: &DirectedGraph<u64>,
    source: usize,
) -> Result<(Duration, RunStatistics, usize), dijkstra_strategies::Error>
where
    A: ShortestPathStrategy<u64, DirectedGraph<u64>>,
{
    let start = Instant::now();
    let run = strategy.compute_distances(graph, source)?;
    let duration = start.elapsed();

    Ok((duration, run.statistics(), run.reachable_count()))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Graph sizes can be given on the command line
    let sizes: Vec<usize> = {
        let parsed: Result<Vec<usize>, _> = std::env::args().skip(1).map(|arg| arg.parse()).collect();
        let parsed = parsed?;
        if parsed.is_empty() {
            vec![1_000, 5_000, 10_000]
        } else {
            parsed
        }
    };

    // Edge factor: average number of edges per vertex
    let edge_factor = 4;

    println!("=====================================================");
    println!("Benchmark: array scan vs lazy queue vs eager queue");
    println!("=====================================================");

    for &size in &sizes {
        let side = (size as f64).sqrt().ceil() as usize;
        let graphs = [
            ("random", generate_random(size, edge_factor, 100, size as u64)),
            ("grid", generate_grid(side, side, 100, size as u64)),
            ("shortcut-chain", generate_shortcut_chain(size)),
        ];

        for (kind, graph) in &graphs {
            println!(
                "\n{} graph: {} vertices, {} edges",
                kind,
                graph.vertex_count(),
                graph.edge_count()
            );
            println!(
                "{:<12} | {:>12} | {:>16} | {:>14} | {:>10}",
                "Strategy", "Time (ms)", "Vertices settled", "Edges relaxed", "Reachable"
            );
            println!("-----------------------------------------------------------------------------");

            for strategy in Strategy::ALL {
                let (duration, statistics, reachable) = benchmark_strategy(&strategy, graph, 0)?;
                println!(
                    "{:<12} | {:>12.3} | {:>16} | {:>14} | {:>10}",
                    strategy.name(),
                    duration.as_secs_f64() * 1000.0,
                    statistics.vertices_settled,
                    statistics.edges_relaxed,
                    reachable
                );
            }
        }
    }

    Ok(())
}
