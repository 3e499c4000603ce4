//! YouTube URL normalization.
//!
//! Extracts the 11-character video identifier from the URL shapes YouTube
//! uses in the wild: watch URLs carrying a `v=` query parameter, youtu.be
//! short links, embed URLs, and legacy `/v/` URLs. Pure string processing,
//! no network access.

use std::fmt;

use crate::error::{ApiError, Result};

// helper.
macro_rules! regex {
    ($re:literal $(,)?) => {{
        static RE: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
        RE.get_or_init(|| regex::Regex::new($re).unwrap())
    }};
}

/// An 11-character YouTube video identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoId(String);

impl VideoId {
    pub(crate) fn new(id: String) -> Self {
        VideoId(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extract the video ID from a YouTube URL.
///
/// Four shapes are recognized, first match wins:
/// `...v=<ID>` in a query string, `youtu.be/<ID>`, `.../embed/<ID>`,
/// `.../v/<ID>`. The ID is exactly 11 characters of `[0-9A-Za-z_-]`; a
/// longer run, or a URL matching no shape, is rejected. A trailing query
/// suffix (`?t=42`) is never part of the captured ID.
pub fn extract_video_id(url: &str) -> Result<VideoId> {
    let url = url.trim();
    if url.is_empty() {
        return Err(ApiError::InvalidUrl("no URL provided".to_string()));
    }

    let patterns = [
        regex!(r"[?&]v=([0-9A-Za-z_-]{11})(?:[^0-9A-Za-z_-]|$)"),
        regex!(r"youtu\.be/([0-9A-Za-z_-]{11})(?:[^0-9A-Za-z_-]|$)"),
        regex!(r"/embed/([0-9A-Za-z_-]{11})(?:[^0-9A-Za-z_-]|$)"),
        regex!(r"/v/([0-9A-Za-z_-]{11})(?:[^0-9A-Za-z_-]|$)"),
    ];

    for re in patterns {
        if let Some(caps) = re.captures(url) {
            return Ok(VideoId::new(caps[1].to_string()));
        }
    }

    Err(ApiError::InvalidUrl(url.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_url() {
        let id = extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap();
        assert_eq!(id.as_str(), "dQw4w9WgXcQ");
    }

    #[test]
    fn test_watch_url_with_extra_params() {
        let id = extract_video_id("https://www.youtube.com/watch?list=PL1&v=dQw4w9WgXcQ&t=120").unwrap();
        assert_eq!(id.as_str(), "dQw4w9WgXcQ");
    }

    #[test]
    fn test_short_url() {
        let id = extract_video_id("https://youtu.be/dQw4w9WgXcQ").unwrap();
        assert_eq!(id.as_str(), "dQw4w9WgXcQ");
    }

    #[test]
    fn test_short_url_with_query_suffix() {
        let id = extract_video_id("https://youtu.be/dQw4w9WgXcQ?t=42").unwrap();
        assert_eq!(id.as_str(), "dQw4w9WgXcQ");
    }

    #[test]
    fn test_embed_url() {
        let id = extract_video_id("https://www.youtube.com/embed/dQw4w9WgXcQ").unwrap();
        assert_eq!(id.as_str(), "dQw4w9WgXcQ");
    }

    #[test]
    fn test_legacy_v_url() {
        let id = extract_video_id("https://www.youtube.com/v/dQw4w9WgXcQ?version=3").unwrap();
        assert_eq!(id.as_str(), "dQw4w9WgXcQ");
    }

    #[test]
    fn test_id_longer_than_11_chars_is_rejected() {
        assert!(matches!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQXX"),
            Err(ApiError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_unrecognized_url() {
        assert!(matches!(
            extract_video_id("https://example.com/watch?x=dQw4w9WgXcQ"),
            Err(ApiError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_empty_url() {
        assert!(matches!(extract_video_id("   "), Err(ApiError::InvalidUrl(_))));
    }
}
