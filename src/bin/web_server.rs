use dijkstra_strategies::web::server::{start_server_with_config, ServerConfig};
use std::env;
use std::num::ParseIntError;

const DEFAULT_PORT: u16 = 3005;

// First argument is the port; a bad value is an error, not the default
fn port_from_args(args: &[String]) -> Result<u16, ParseIntError> {
    match args.get(1) {
        Some(port) => port.parse(),
        None => Ok(DEFAULT_PORT),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let port = port_from_args(&args)?;

    let config = ServerConfig {
        port,
        ..Default::default()
    };

    println!("Starting shortest path strategy server...");
    println!("Configuration:");
    println!("   Port: {}", config.port);
    println!("   CORS enabled: {}", config.enable_cors);
    println!("   Max sessions: {}", config.max_sessions);
    println!();

    start_server_with_config(config).await?;

    Ok(())
}
