//! Report error types.

use thiserror::Error;

/// Errors that can occur while generating a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A pipeline variable needed to address the platform API is not set.
    ///
    /// The applicability gate only checks the credential and the pull
    /// request id; a pipeline that passes the gate but lacks one of the
    /// URL variables fails here, hard.
    #[error("required pipeline variable '{name}' is not set")]
    MissingVariable { name: &'static str },

    /// I/O error reading the feedback artifact.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Payload serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Connection-level transport failure. HTTP error responses are NOT
    /// mapped here; they are logged and recovered locally.
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),
}
