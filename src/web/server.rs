use axum::{
    http::{header, Method},
    Router,
};
use log::info;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::web::api::{create_router, AppState};

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub enable_cors: bool,
    pub max_sessions: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3005,
            enable_cors: true,
            max_sessions: 1000,
        }
    }
}

/// Build the application with middleware
pub fn build_app(config: &ServerConfig) -> Router {
    let app = Router::new()
        .merge(create_router())
        .with_state(AppState::new(config.max_sessions));

    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

        app.layer(ServiceBuilder::new().layer(cors).into_inner())
    } else {
        app
    }
}

/// Start the web server with custom configuration
pub async fn start_server_with_config(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_app(&config);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    info!("shortest path server listening on http://{}", addr);
    info!("health check at http://{}/api/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
