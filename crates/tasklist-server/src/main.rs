//! Tasklist HTTP Server

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod config;
mod http;
mod state;
mod store;

use config::Config;
use state::AppState;
use store::SqliteTaskStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load config
    let config = Config::from_env();
    let http_addr: SocketAddr = config.http_bind_addr.parse()?;

    // Open the store, bootstrapping the schema if absent
    let store = SqliteTaskStore::open(&config.db_path)
        .map_err(|e| format!("Failed to open task store at '{}': {}", config.db_path, e))?;
    info!(db_path = %config.db_path, "task store opened");

    // Create shared state and router
    let state = Arc::new(AppState::new(store));
    let router = http::create_router(state);

    let listener = TcpListener::bind(http_addr).await?;
    info!("HTTP server listening on {}", http_addr);

    axum::serve(listener, router).await?;

    Ok(())
}
