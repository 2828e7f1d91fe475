//! Marquee API Server
//!
//! Run with: cargo run
//!
//! # Configuration
//!
//! Environment variables:
//! - `MARQUEE_HOST`: Host to bind to (default: 0.0.0.0)
//! - `MARQUEE_PORT`: Port to listen on (default: 8000)
//! - `MARQUEE_MESSAGE`: Message served to the front-end (default: "Hello from Marquee!")
//! - `RUST_LOG`: Log level (default: info)

use marquee::api::{serve, ApiConfig, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "marquee=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Marquee API server v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration from environment
    let config = load_api_config();
    tracing::info!("Serving message: {:?}", config.message);

    let state = AppState::new(config.clone());

    // Run server
    tracing::info!("Starting server on {}:{}", config.host, config.port);
    serve(state, &config).await?;

    tracing::info!("Marquee API server stopped");
    Ok(())
}

/// Load API configuration from environment
fn load_api_config() -> ApiConfig {
    let host = std::env::var("MARQUEE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

    let port = std::env::var("MARQUEE_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8000);

    let message = std::env::var("MARQUEE_MESSAGE")
        .unwrap_or_else(|_| "Hello from Marquee!".to_string());

    ApiConfig {
        host,
        port,
        message,
    }
}
