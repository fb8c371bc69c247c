//! Dijkstra Strategies - three comparable single-source shortest path engines
//!
//! This library runs Dijkstra's algorithm over an immutable weighted digraph in
//! three ways and reports how much work each one did:
//!
//! * an O(V²) array scan with an explicit visited set,
//! * a lazy priority queue seeded with the source only, tolerating stale entries,
//! * an eager priority queue seeded with every vertex, re-inserting on relaxation.
//!
//! Edge weights are non-negative integers. Unreachable vertices end at
//! [`Distance::Infinite`]; that is a normal outcome, not an error.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod loader;
pub mod report;
pub mod web;

pub use algorithm::{
    run_array_scan, run_eager_queue, run_lazy_queue, Distance, RunStatistics,
    ShortestPathStrategy, Strategy, StrategyRun,
};
/// Re-export main types for convenient use
pub use graph::{DirectedGraph, Edge, Graph, Weight};
pub use loader::{build_graph, read_graph, read_graph_from, write_graph};
pub use report::StrategyComparison;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    OutOfRange { vertex: usize, vertex_count: usize },

    #[error("Malformed row on line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    #[error("Invalid vertex index {index} on line {line}: expected 1..={vertex_count}")]
    InvalidIndex {
        line: usize,
        index: i64,
        vertex_count: usize,
    },

    #[error("Could not read graph data: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
