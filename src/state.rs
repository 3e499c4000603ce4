//! Application state management
//!
//! This module defines the AppState structure that holds:
//! - Server configuration
//! - The shared outbound HTTP client
//!
//! There is no other cross-request state; every request is handled
//! independently and nothing survives the response.

use std::time::Duration;

use crate::config::ServerConfig;

/// Base URL for all outbound YouTube requests (oEmbed, watch page,
/// InnerTube player). Tests point this at a local mock server.
pub const YOUTUBE_BASE_URL: &str = "https://www.youtube.com";

/// Application state
pub struct AppState {
    /// Server configuration
    pub config: ServerConfig,

    /// Shared HTTP client with a bounded total-request timeout
    pub http: reqwest::Client,

    /// Base URL of the YouTube endpoints
    pub youtube_base_url: String,
}

impl AppState {
    /// Create new application state
    pub fn new(config: ServerConfig) -> Self {
        Self::with_base_url(config, YOUTUBE_BASE_URL.to_string())
    }

    /// Create application state with a custom YouTube base URL
    pub fn with_base_url(config: ServerConfig, youtube_base_url: String) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("failed to build HTTP client");

        Self {
            config,
            http,
            youtube_base_url,
        }
    }
}
