// Crate error taxonomy
use thiserror::Error;

/// Errors surfaced to the rendering layer.
///
/// `MovieNotFound` and the validation variants are presentational states,
/// not faults; only `Storage` and `Serialization` indicate real trouble.
#[derive(Debug, Error)]
pub enum Error {
    #[error("movie not found: {0}")]
    MovieNotFound(String),

    #[error("review text must not be empty")]
    EmptyReviewText,

    #[error("a star rating is required before submitting a review")]
    RatingRequired,

    #[error("rating {0} out of range (expected 1-5)")]
    RatingOutOfRange(u8),

    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("malformed stored data: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
