use dijkstra_strategies::report::{format_distances, StrategyComparison};
use dijkstra_strategies::{read_graph, DirectedGraph, Graph};
use std::env;
use std::io::{self, BufRead, Write};

const DEFAULT_FILE: &str = "Test.txt";

// Prompts on stdin, falling back to `default` on an empty answer
fn prompt(question: &str, default: &str) -> io::Result<String> {
    print!("{} [{}]: ", question, default);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    let answer = answer.trim();
    Ok(if answer.is_empty() { default.to_string() } else { answer.to_string() })
}

// Converts a 1-based start vertex to a 0-based source, reporting errors 1-based
fn source_index(start_vertex: usize, vertex_count: usize) -> Result<usize, String> {
    if (1..=vertex_count).contains(&start_vertex) {
        Ok(start_vertex - 1)
    } else {
        Err(format!(
            "start vertex {} is out of range: expected 1..={}",
            start_vertex, vertex_count
        ))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Usage: sssp [file] [start-vertex] [--parallel]
    let mut args: Vec<String> = env::args().skip(1).collect();
    let parallel = args.iter().any(|arg| arg == "--parallel");
    args.retain(|arg| arg != "--parallel");

    let filename = match args.first() {
        Some(name) => name.clone(),
        None => prompt("Enter a filename", DEFAULT_FILE)?,
    };
    let start_vertex: usize = match args.get(1) {
        Some(value) => value.parse()?,
        None => prompt("Enter start vertex", "1")?.parse()?,
    };

    let graph: DirectedGraph<u64> = read_graph(&filename)?;
    println!(
        "Loaded {} with {} vertices and {} edges",
        filename,
        graph.vertex_count(),
        graph.edge_count()
    );
    println!();

    // Start vertices are 1-based on the command line
    let source = source_index(start_vertex, graph.vertex_count())?;

    let comparison = if parallel {
        StrategyComparison::<u64>::run_parallel(&graph, source)?
    } else {
        StrategyComparison::<u64>::run(&graph, source)?
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    comparison.write_report(&mut out)?;

    if comparison.distances_agree() {
        if let Some(run) = comparison.runs().first() {
            writeln!(out, "All strategies agree: {}", format_distances(run.distances()))?;
        }
    } else {
        writeln!(
            out,
            "WARNING: strategies disagree on vertices {:?}",
            comparison.disagreements()
        )?;
    }

    Ok(())
}
