//! Video metadata via YouTube's oEmbed endpoint.

use serde_json::Value;
use tracing::debug;

use crate::error::{ApiError, Result};
use crate::video_id::VideoId;

/// Fetch video metadata from the oEmbed endpoint.
///
/// The JSON body is returned exactly as the provider sent it; no schema
/// validation and no field filtering happen here.
pub async fn fetch_video_data(
    client: &reqwest::Client,
    base_url: &str,
    video_id: &VideoId,
) -> Result<Value> {
    let watch_url = format!("https://www.youtube.com/watch?v={video_id}");
    let oembed_url = format!("{base_url}/oembed");
    debug!("Fetching oEmbed metadata for video {video_id}");

    let response = client
        .get(&oembed_url)
        .query(&[("url", watch_url.as_str()), ("format", "json")])
        .send()
        .await
        .map_err(|e| ApiError::MetadataUnavailable(e.to_string()))?
        .error_for_status()
        .map_err(|e| ApiError::MetadataUnavailable(e.to_string()))?;

    response
        .json::<Value>()
        .await
        .map_err(|e| ApiError::MetadataUnavailable(e.to_string()))
}
