use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::algorithm::{RunStatistics, StrategyRun};
use crate::graph::{DirectedGraph, Graph};

/// Request body for loading a graph from the text adjacency format
#[derive(Debug, Deserialize)]
pub struct LoadGraphRequest {
    /// Tab-separated rows with 1-based vertex indices
    pub adjacency: String,
}

/// Short description of a loaded graph
#[derive(Debug, Clone, Serialize)]
pub struct GraphSummary {
    pub session_id: Uuid,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub created_at: DateTime<Utc>,
}

/// An edge of a loaded graph, 0-based
#[derive(Debug, Clone, Serialize)]
pub struct WebEdge {
    pub source: usize,
    pub target: usize,
    pub weight: u64,
}

/// Full listing of a loaded graph
#[derive(Debug, Clone, Serialize)]
pub struct WebGraph {
    pub vertex_count: usize,
    pub edges: Vec<WebEdge>,
}

impl From<&DirectedGraph<u64>> for WebGraph {
    fn from(graph: &DirectedGraph<u64>) -> Self {
        let edges = graph
            .rows()
            .flat_map(|(source, row)| {
                row.iter().map(move |edge| WebEdge {
                    source,
                    target: edge.destination(),
                    weight: edge.weight(),
                })
            })
            .collect();

        WebGraph {
            vertex_count: graph.vertex_count(),
            edges,
        }
    }
}

/// Parameters for running one strategy
#[derive(Debug, Deserialize)]
pub struct RunRequest {
    pub strategy: String,
    /// 0-based source vertex
    pub source: usize,
}

/// Parameters for running all strategies
#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    /// 0-based source vertex
    pub source: usize,
    #[serde(default)]
    pub parallel: bool,
}

/// Counters of one run
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatisticsBody {
    pub vertices_settled: usize,
    pub edges_relaxed: usize,
}

impl From<RunStatistics> for StatisticsBody {
    fn from(statistics: RunStatistics) -> Self {
        StatisticsBody {
            vertices_settled: statistics.vertices_settled,
            edges_relaxed: statistics.edges_relaxed,
        }
    }
}

/// Result of one strategy; unreachable vertices are `null`
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub strategy: String,
    pub statistics: StatisticsBody,
    pub reachable: usize,
    pub distances: Vec<Option<u64>>,
}

impl From<&StrategyRun<u64>> for RunSummary {
    fn from(run: &StrategyRun<u64>) -> Self {
        RunSummary {
            strategy: run.strategy().name().to_string(),
            statistics: run.statistics().into(),
            reachable: run.reachable_count(),
            distances: run.distances().iter().map(|d| d.finite()).collect(),
        }
    }
}

/// Response for a single strategy run
#[derive(Debug, Clone, Serialize)]
pub struct RunResponse {
    pub execution_id: Uuid,
    pub source: usize,
    pub execution_time_ms: f64,
    #[serde(flatten)]
    pub run: RunSummary,
}

/// Response for a comparison of all strategies
#[derive(Debug, Clone, Serialize)]
pub struct CompareResponse {
    pub comparison_id: Uuid,
    pub source: usize,
    pub parallel: bool,
    pub execution_time_ms: f64,
    pub runs: Vec<RunSummary>,
    pub distances_agree: bool,
    pub disagreements: Vec<usize>,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

/// Session holding one loaded graph and its latest comparison
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub graph: Arc<DirectedGraph<u64>>,
    pub last_comparison: Option<CompareResponse>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(graph: DirectedGraph<u64>) -> Self {
        Self {
            id: Uuid::new_v4(),
            graph: Arc::new(graph),
            last_comparison: None,
            created_at: Utc::now(),
        }
    }

    pub fn summary(&self) -> GraphSummary {
        GraphSummary {
            session_id: self.id,
            vertex_count: self.graph.vertex_count(),
            edge_count: self.graph.edge_count(),
            created_at: self.created_at,
        }
    }
}

/// Serialized view of a session
#[derive(Debug, Clone, Serialize)]
pub struct SessionInfo {
    #[serde(flatten)]
    pub summary: GraphSummary,
    pub last_comparison: Option<CompareResponse>,
}

impl From<&Session> for SessionInfo {
    fn from(session: &Session) -> Self {
        SessionInfo {
            summary: session.summary(),
            last_comparison: session.last_comparison.clone(),
        }
    }
}
