/// Error types shared across the application
///
/// None of these are fatal at runtime: review errors become toast
/// notifications and config errors fall back to defaults. Only a broken
/// seed catalog stops startup.

use thiserror::Error;

/// Reasons a review cannot be submitted
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReviewError {
    /// No star was selected on the review screen
    #[error("Please select a rating")]
    MissingRating,

    /// The trimmed review text is shorter than the configured minimum
    #[error("Tell us a bit more about your experience")]
    TooShort { min: usize },

    /// Rating outside the 1-5 star range
    #[error("Rating must be between 1 and 5 stars (got {0})")]
    RatingOutOfRange(u8),

    /// Review text is empty after trimming
    #[error("Review text cannot be empty")]
    EmptyText,

    /// The previous submission is still waiting to return to the spot
    #[error("Your review is already being submitted")]
    AlreadySubmitted,
}

/// Failures while loading the seed catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to parse seed catalog: {0}")]
    Seed(#[from] serde_json::Error),

    #[error("Duplicate spot id in catalog: {0}")]
    DuplicateSpotId(String),

    #[error("Seed catalog contains no spots")]
    Empty,
}

/// Failures while reading the optional config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}
