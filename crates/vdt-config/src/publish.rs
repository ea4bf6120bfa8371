//! Publish options.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use vdt_core::enums::{CommentState, RunMode};

/// Default directory the analysis step writes its artifacts into.
fn default_output_dir() -> PathBuf {
    PathBuf::from("verdict-output")
}

const fn default_run_mode() -> RunMode {
    RunMode::FeedbackOnly
}

const fn default_comment_state() -> CommentState {
    CommentState::Active
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PublishConfig {
    /// Directory containing `feedback.json` and `feedback.md`.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// How this run treats the quality outcome.
    #[serde(default = "default_run_mode")]
    pub run_mode: RunMode,

    /// Resolution state for published comment threads.
    #[serde(default = "default_comment_state")]
    pub comment_state: CommentState,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            run_mode: default_run_mode(),
            comment_state: default_comment_state(),
        }
    }
}
