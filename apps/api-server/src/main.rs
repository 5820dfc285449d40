//! Enxoval API Server binary.

use std::net::SocketAddr;

use api_server::{config::Config, create_app, create_state, init_tracing, seed};
use registry_store::SqliteRegistryStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.log_level);

    tracing::info!(database_url = %config.database_url, "Starting Enxoval API Server");

    // Open the item store
    let store = SqliteRegistryStore::connect(&config.database_url).await?;

    // Seed the initial catalog on first boot
    if config.seed_catalog {
        seed::seed_catalog(&store).await?;
    }

    // Create application state
    let state = create_state(config.clone(), store);

    // Create application router
    let app = create_app(state);

    // Parse server address
    let addr: SocketAddr = config.server_addr().parse()?;

    tracing::info!(addr = %addr, "Server listening");

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
