//! Accident Explorer HTTP Server Binary
//!
//! Loads the configured dataset, opens one dashboard session on it and serves
//! the linked views as JSON.
//!
//! # Usage
//!
//! ```bash
//! EXPLORER_DATA_PATH=Road_Accident_Data.csv cargo run --bin explorer-server
//! ```
//!
//! # Environment Variables
//!
//! - `EXPLORER_DATA_PATH`: dataset file, `.csv` or `.json` (default: Road_Accident_Data.csv)
//! - `EXPLORER_SEED`: sampling seed (default: 42)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use accident_explorer::config::ExplorerConfig;
use accident_explorer::http::{create_router, AppState};
use accident_explorer::services::Dashboard;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Accident Explorer HTTP Server");

    let config = ExplorerConfig::load()?;
    let dashboard = Dashboard::from_config(&config)?;
    info!("{}", dashboard.caption());

    // Create application state
    let state = AppState::new(dashboard);

    // Create router with all endpoints
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
