//! Core error types.

use thiserror::Error;

/// Errors raised while loading the structured feedback file.
#[derive(Debug, Error)]
pub enum FeedbackError {
    /// I/O error reading the feedback file.
    #[error("failed to read feedback file: {0}")]
    Io(#[from] std::io::Error),

    /// The feedback file is not valid JSON for the expected model.
    #[error("failed to parse feedback file: {0}")]
    Json(#[from] serde_json::Error),
}
