//! HTTP request handlers
//!
//! Implements the three video endpoint pipelines plus the docs and
//! liveness endpoints. Each video handler is a straight pipeline:
//! normalize the URL, call the fetcher, shape the result as JSON. All
//! upstream failures are converted here into `{"detail": <message>}`
//! responses.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::ApiError;
use crate::format;
use crate::oembed;
use crate::state::AppState;
use crate::transcript;
use crate::video_id::extract_video_id;

/// Request body shared by all three video endpoints
#[derive(Debug, Deserialize)]
pub struct VideoRequest {
    /// YouTube video URL (watch, short, embed, or legacy /v/ form)
    pub url: String,

    /// Ordered caption language preferences; defaults to `["en"]`
    pub languages: Option<Vec<String>>,
}

impl VideoRequest {
    /// Resolve the optional language list before it reaches the fetcher.
    /// The list itself is passed through unvalidated.
    fn languages_or_default(&self) -> Vec<String> {
        self.languages
            .clone()
            .unwrap_or_else(|| vec!["en".to_string()])
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::InvalidUrl(_) => StatusCode::BAD_REQUEST,
            // Metadata and transcript failures deliberately share one
            // status code; callers disambiguate on the detail text.
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(serde_json::json!({ "detail": self.to_string() }))).into_response()
    }
}

/// Video metadata endpoint
/// POST /video-data
pub async fn video_data(
    State(state): State<Arc<AppState>>,
    Json(req): Json<VideoRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let video_id = extract_video_id(&req.url)?;
    let data = oembed::fetch_video_data(&state.http, &state.youtube_base_url, &video_id).await?;
    Ok(Json(data))
}

/// Plain-text captions endpoint
/// POST /video-captions
pub async fn video_captions(
    State(state): State<Arc<AppState>>,
    Json(req): Json<VideoRequest>,
) -> Result<Json<String>, ApiError> {
    let video_id = extract_video_id(&req.url)?;
    let segments = transcript::fetch_transcript(
        &state.http,
        &state.youtube_base_url,
        &video_id,
        &req.languages_or_default(),
    )
    .await?;
    Ok(Json(format::plain_text(&segments)))
}

/// Timestamped captions endpoint
/// POST /video-timestamps
pub async fn video_timestamps(
    State(state): State<Arc<AppState>>,
    Json(req): Json<VideoRequest>,
) -> Result<Json<Vec<String>>, ApiError> {
    let video_id = extract_video_id(&req.url)?;
    let segments = transcript::fetch_transcript(
        &state.http,
        &state.youtube_base_url,
        &video_id,
        &req.languages_or_default(),
    )
    .await?;
    Ok(Json(format::timestamps(&segments)))
}

/// Root endpoint — redirect to the API docs
pub async fn root_redirect() -> Redirect {
    Redirect::to("/docs")
}

/// API documentation endpoint
pub async fn api_docs() -> Html<&'static str> {
    Html(DOCS_HTML)
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}

/// Version endpoint
pub async fn version_check() -> &'static str {
    concat!("yt-tools-server v", env!("CARGO_PKG_VERSION"))
}

const DOCS_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>YouTube Tools API</title>
<style>
body { font-family: sans-serif; max-width: 50em; margin: 2em auto; padding: 0 1em; }
code, pre { background: #f4f4f4; padding: 2px 4px; }
pre { padding: 0.8em; overflow-x: auto; }
h2 { border-bottom: 1px solid #ddd; padding-bottom: 0.2em; }
</style>
</head>
<body>
<h1>YouTube Tools API</h1>
<p>Fetch YouTube video metadata and captions. All endpoints accept a JSON
body and return JSON. Supported URL forms: <code>watch?v=</code>,
<code>youtu.be/</code>, <code>embed/</code>, and legacy <code>/v/</code>.</p>

<h2>POST /video-data</h2>
<p>Returns the video's oEmbed metadata (title, author, thumbnail, ...).</p>
<pre>{"url": "https://www.youtube.com/watch?v=dQw4w9WgXcQ"}</pre>

<h2>POST /video-captions</h2>
<p>Returns the video's captions as one plain-text JSON string.
<code>languages</code> is an optional ordered preference list, default
<code>["en"]</code>.</p>
<pre>{"url": "https://youtu.be/dQw4w9WgXcQ", "languages": ["en", "es"]}</pre>

<h2>POST /video-timestamps</h2>
<p>Returns a JSON array of <code>"M:SS - caption text"</code> lines
(<code>H:MM:SS</code> past the first hour).</p>
<pre>{"url": "https://youtu.be/dQw4w9WgXcQ"}</pre>

<h2>Errors</h2>
<p>Failures are reported as <code>{"detail": "&lt;message&gt;"}</code>:
400 for an unrecognized URL, 500 for metadata or caption fetch failures.</p>
</body>
</html>
"#;
