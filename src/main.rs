//! YouTube Tools Server
//!
//! A small HTTP API that fetches YouTube video metadata via the oEmbed
//! endpoint and video captions via the InnerTube player API, serving them
//! as JSON: raw metadata, concatenated caption text, and timestamped
//! transcript lines.

mod config;
mod error;
mod format;
mod http;
mod oembed;
mod state;
mod transcript;
mod video_id;

use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::http::create_router;
use crate::state::AppState;

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
const APP_NAME: &str = "yt-tools-server";

#[tokio::main]
async fn main() {
    // Initialize logging
    init_logging();

    tracing::info!("{} v{} starting", APP_NAME, VERSION);

    // Load configuration: optional TOML file, then HOST/PORT env overrides
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());
    let config = if std::path::Path::new(&config_path).exists() {
        match ServerConfig::from_file(&config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!(
                    "Failed to load config file {}: {}. Using defaults.",
                    config_path,
                    e
                );
                ServerConfig::default()
            }
        }
    } else {
        ServerConfig::default()
    };
    let config = config.with_env_overrides();
    tracing::info!("Configuration loaded: {:?}", config);

    // Create application state
    let state = Arc::new(AppState::new(config));

    // Build router
    let app = create_router(state.clone());

    // Start server
    let addr: SocketAddr = state.config.socket_addr().parse().unwrap();
    tracing::info!("Starting HTTP server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

/// Initialize logging with tracing
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "yt_tools_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
