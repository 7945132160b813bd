//! Error types for the estadia crate.

use thiserror::Error;

/// Errors that can occur while syncing or querying listing availability.
///
/// Both feed error kinds are expected operational conditions, not
/// programming errors: callers keep the previous snapshot and render the
/// calendar as temporarily unavailable.
#[derive(Error, Debug)]
pub enum EstadiaError {
    #[error("Feed request failed with HTTP status {0}")]
    FeedFetch(u16),

    #[error("Feed request failed: {0}")]
    FeedRequest(String),

    #[error("Invalid feed URL: {0}")]
    InvalidFeedUrl(String),

    #[error("Feed parse error: {0}")]
    FeedParse(String),

    #[error("Listing store error: {0}")]
    Listing(String),

    #[error("Listing not found: {0}")]
    ListingNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for estadia operations.
pub type EstadiaResult<T> = Result<T, EstadiaError>;
