//! Error types for the RT scraper
//!
//! Only record-level and collaborator failures live here. A field that
//! cannot be located or parsed is never an error: it becomes the
//! `"not found"` sentinel inside the [`MediaRecord`](crate::MediaRecord).

use thiserror::Error;

/// Error type for scraping and sheet write-back operations
#[derive(Error, Debug)]
pub enum RtError {
    /// HTTP request failed (network error, timeout, non-2xx status)
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Requested page does not exist (HTTP 404)
    #[error("Page not found: {0}")]
    NotFound(String),

    /// The `og:type` marker is missing or names neither a movie nor a TV show
    #[error("Unrecognized media type: {0:?}")]
    UnrecognizedType(String),

    /// A TV season URL that has no show-level `/tv/<slug>` prefix
    #[error("Malformed series URL: {0}")]
    MalformedSeriesUrl(String),

    /// Invalid URL passed to the scraper
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Sheet header row lacks one of the required columns
    #[error("Missing sheet column: {0}")]
    MissingColumn(String),

    /// Sheet store failed to read or write
    #[error("Sheet error: {0}")]
    Sheet(String),
}

impl RtError {
    /// Whether the record should be skipped quietly rather than reported as a failure.
    pub fn is_skip(&self) -> bool {
        matches!(self, RtError::UnrecognizedType(_))
    }
}

/// Result type alias for RT scraper operations
pub type Result<T> = std::result::Result<T, RtError>;
