use thiserror::Error;

/// Main error type for the YouTube tools server
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid YouTube URL: {0}")]
    InvalidUrl(String),

    #[error("error getting video data: {0}")]
    MetadataUnavailable(String),

    #[error("no transcript available: {0}")]
    NoTranscriptAvailable(String),

    #[error("video unavailable: {0}")]
    VideoUnavailable(String),

    #[error("error fetching transcript: {0}")]
    Transcript(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ApiError>;
