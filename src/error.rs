//! Typed errors for the recommendation pipeline.
//!
//! Data-quality problems (bad play counts, null names, missing genres) never
//! surface here; they are defaulted away while indexing. Only structural
//! problems with the input table and I/O failures are errors.

use thiserror::Error;

/// Errors that can occur while reading a library table or producing recommendations.
#[derive(Debug, Error)]
pub enum RecommendError {
    /// A column the pipeline cannot run without is absent from the input
    #[error("Missing required column '{0}'")]
    MissingColumn(String),

    /// The input could be read but is not a table
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RecommendError>;
