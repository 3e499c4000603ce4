//! Axum router configuration

use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

use super::handlers::{
    api_docs, health_check, root_redirect, version_check, video_captions, video_data,
    video_timestamps,
};

/// Create the Axum router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    // Allow-all CORS: the API is meant to be called from arbitrary origins.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::ACCEPT, header::CONTENT_TYPE, header::ORIGIN])
        .max_age(Duration::from_secs(3600));

    Router::new()
        // Docs and liveness endpoints
        .route("/", get(root_redirect))
        .route("/docs", get(api_docs))
        .route("/health", get(health_check))
        .route("/version", get(version_check))
        // Video endpoints
        .route("/video-data", post(video_data))
        .route("/video-captions", post(video_captions))
        .route("/video-timestamps", post(video_timestamps))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // State
        .with_state(state)
}
