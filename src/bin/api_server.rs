// API Server Binary Entry Point
//
// Purpose: Start the Axum diagnosis server
// Usage: cargo run --features api --bin api_server

use plant_diagnosis_rust::{create_router, AppState, ServerConfig};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "plant_diagnosis_rust=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API server...");

    // Configuration from environment variables
    let config = ServerConfig::from_env()?;

    tracing::info!("Configuration:");
    tracing::info!(
        "  KNOWLEDGE_BASE_PATH: {}",
        config.knowledge_base_path.as_deref().unwrap_or("<built-in>")
    );
    tracing::info!("  CONFIDENCE_THRESHOLD: {}", config.defaults.confidence_threshold);
    tracing::info!("  TOP_K: {}", config.defaults.top_k);
    tracing::info!("  PORT: {}", config.port);

    tracing::info!("Initializing application state...");
    let state = AppState::new(&config)?;
    tracing::info!("Application state initialized successfully");

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
