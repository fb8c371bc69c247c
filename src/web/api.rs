use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use log::info;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::Strategy;
use crate::graph::DirectedGraph;
use crate::loader::build_graph;
use crate::report::StrategyComparison;
use crate::web::models::*;
use crate::Error;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    pub max_sessions: usize,
}

impl AppState {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            max_sessions,
        }
    }

    fn sessions(&self) -> MutexGuard<'_, HashMap<Uuid, Session>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn graph(&self, session_id: Uuid) -> Result<Arc<DirectedGraph<u64>>, ApiError> {
        self.sessions()
            .get(&session_id)
            .map(|session| Arc::clone(&session.graph))
            .ok_or_else(session_not_found)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(1000)
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/graphs", post(load_graph))
        .route("/api/graphs/:session_id", get(get_graph))
        .route("/api/strategies/run/:session_id", post(run_strategy))
        .route("/api/strategies/compare/:session_id", post(compare_strategies))
        .route("/api/sessions", get(list_sessions))
        .route("/api/sessions/:session_id", get(get_session).delete(delete_session))
        .route("/api/health", get(health_check))
}

/// Load a graph from text rows into a new session
pub async fn load_graph(
    State(state): State<AppState>,
    Json(request): Json<LoadGraphRequest>,
) -> Result<Json<GraphSummary>, ApiError> {
    let graph = build_graph::<u64, _, _>(request.adjacency.lines()).map_err(engine_error)?;
    let session = Session::new(graph);
    let summary = session.summary();

    {
        let mut sessions = state.sessions();
        if sessions.len() >= state.max_sessions {
            return Err(api_error(
                StatusCode::SERVICE_UNAVAILABLE,
                "session_limit_reached",
                format!("At most {} sessions can be open", state.max_sessions),
            ));
        }
        sessions.insert(session.id, session);
    }

    info!(
        "session {} loaded graph with {} vertices and {} edges",
        summary.session_id, summary.vertex_count, summary.edge_count
    );
    Ok(Json(summary))
}

/// Get graph data for a session
pub async fn get_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<WebGraph>, ApiError> {
    let graph = state.graph(session_id)?;
    Ok(Json(WebGraph::from(graph.as_ref())))
}

/// Run one strategy on a session's graph
pub async fn run_strategy(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<RunRequest>,
) -> Result<Json<RunResponse>, ApiError> {
    let strategy: Strategy = request
        .strategy
        .parse()
        .map_err(|err: crate::algorithm::UnknownStrategy| {
            api_error(StatusCode::BAD_REQUEST, "invalid_strategy", err.to_string())
        })?;
    let graph = state.graph(session_id)?;

    let source = request.source;
    let (run, execution_time) = tokio::task::spawn_blocking(move || {
        let start_time = Instant::now();
        let run = strategy.run(graph.as_ref(), source);
        (run, start_time.elapsed())
    })
    .await
    .map_err(task_failed)?;
    let run = run.map_err(engine_error)?;

    Ok(Json(RunResponse {
        execution_id: Uuid::new_v4(),
        source: request.source,
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
        run: RunSummary::from(&run),
    }))
}

/// Run every strategy on a session's graph and compare the results
pub async fn compare_strategies(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<CompareRequest>,
) -> Result<Json<CompareResponse>, ApiError> {
    let graph = state.graph(session_id)?;

    let (source, parallel) = (request.source, request.parallel);
    let (comparison, execution_time) = tokio::task::spawn_blocking(move || {
        let start_time = Instant::now();
        let comparison = if parallel {
            StrategyComparison::<u64>::run_parallel(graph.as_ref(), source)
        } else {
            StrategyComparison::<u64>::run(graph.as_ref(), source)
        };
        (comparison, start_time.elapsed())
    })
    .await
    .map_err(task_failed)?;
    let comparison = comparison.map_err(engine_error)?;

    let response = CompareResponse {
        comparison_id: Uuid::new_v4(),
        source: request.source,
        parallel: request.parallel,
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
        runs: comparison.runs().iter().map(RunSummary::from).collect(),
        distances_agree: comparison.distances_agree(),
        disagreements: comparison.disagreements(),
    };

    // Update session with result
    if let Some(session) = state.sessions().get_mut(&session_id) {
        session.last_comparison = Some(response.clone());
    }

    Ok(Json(response))
}

/// List all active sessions
pub async fn list_sessions(State(state): State<AppState>) -> Json<Vec<GraphSummary>> {
    let mut summaries: Vec<GraphSummary> = state.sessions().values().map(Session::summary).collect();
    summaries.sort_by_key(|summary| summary.created_at);
    Json(summaries)
}

/// Get session information
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionInfo>, ApiError> {
    let sessions = state.sessions();
    let info = sessions.get(&session_id).map(SessionInfo::from);
    info.map(Json).ok_or_else(session_not_found)
}

/// Close a session and free its slot
pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let removed = state.sessions().remove(&session_id);
    match removed {
        Some(_) => {
            info!("session {} closed", session_id);
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err(session_not_found()),
    }
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

// Helper functions

fn api_error(status: StatusCode, error: &str, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            message: message.into(),
            details: None,
        }),
    )
}

fn session_not_found() -> ApiError {
    api_error(StatusCode::NOT_FOUND, "session_not_found", "Session not found")
}

fn task_failed(err: tokio::task::JoinError) -> ApiError {
    api_error(StatusCode::INTERNAL_SERVER_ERROR, "task_failed", err.to_string())
}

fn engine_error(err: Error) -> ApiError {
    let message = err.to_string();
    match err {
        Error::OutOfRange { vertex, vertex_count } => {
            let (status, Json(mut body)) = api_error(StatusCode::BAD_REQUEST, "out_of_range", message);
            body.details = Some(serde_json::json!({
                "vertex": vertex,
                "vertex_count": vertex_count,
            }));
            (status, Json(body))
        }
        Error::MalformedRow { line, .. } | Error::InvalidIndex { line, .. } => {
            let (status, Json(mut body)) =
                api_error(StatusCode::UNPROCESSABLE_ENTITY, "invalid_graph", message);
            body.details = Some(serde_json::json!({ "line": line }));
            (status, Json(body))
        }
        Error::Io(_) => api_error(StatusCode::INTERNAL_SERVER_ERROR, "io_error", message),
    }
}
