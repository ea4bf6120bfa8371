//! Run mode, comment state, objective status, and thread state enums.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! and implement `FromStr` so they can be named on the command line and in
//! config files.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an enum from its string form fails.
#[derive(Debug, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

// ---------------------------------------------------------------------------
// RunMode
// ---------------------------------------------------------------------------

/// How a Verdict CI run treats the quality outcome.
///
/// `FeedbackOnly` reports findings without failing the build; `GateOnly`
/// fails the build on a missed objective without publishing feedback;
/// `FeedbackAndGate` does both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    FeedbackOnly,
    FeedbackAndGate,
    GateOnly,
}

impl RunMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FeedbackOnly => "feedback_only",
            Self::FeedbackAndGate => "feedback_and_gate",
            Self::GateOnly => "gate_only",
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RunMode {
    type Err = ParseEnumError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "feedback_only" => Ok(Self::FeedbackOnly),
            "feedback_and_gate" => Ok(Self::FeedbackAndGate),
            "gate_only" => Ok(Self::GateOnly),
            _ => Err(ParseEnumError {
                kind: "run mode",
                value: value.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// CommentState
// ---------------------------------------------------------------------------

/// Requested resolution state for published pull request comment threads.
///
/// `Smart` leaves the thread open only when the quality objective worsened,
/// so reviewers see an unresolved thread exactly when action is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentState {
    Active,
    Closed,
    Smart,
}

impl CommentState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Closed => "closed",
            Self::Smart => "smart",
        }
    }
}

impl fmt::Display for CommentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommentState {
    type Err = ParseEnumError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "active" => Ok(Self::Active),
            "closed" => Ok(Self::Closed),
            "smart" => Ok(Self::Smart),
            _ => Err(ParseEnumError {
                kind: "comment state",
                value: value.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// ObjectiveStatus
// ---------------------------------------------------------------------------

/// Verdict on how a change measures against the quality objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectiveStatus {
    /// New code meets the target rating.
    Achieved,
    /// Below target, but better than the baseline.
    Improved,
    /// Below target, no measurable movement against the baseline.
    Unchanged,
    /// Below target and worse than the baseline.
    Worsened,
    /// Not enough data to score the change.
    Unknown,
}

impl ObjectiveStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Achieved => "achieved",
            Self::Improved => "improved",
            Self::Unchanged => "unchanged",
            Self::Worsened => "worsened",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ObjectiveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ThreadState
// ---------------------------------------------------------------------------

/// Open/closed state of a comment thread on the platform.
///
/// Serializes to exactly `"active"` / `"closed"`, the strings the Azure
/// DevOps threads API expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreadState {
    Active,
    Closed,
}

impl ThreadState {
    /// Resolve the thread state for a published feedback comment.
    ///
    /// `Active` and `Closed` are unconditional. `Smart` keeps the thread
    /// open only when the objective worsened.
    #[must_use]
    pub const fn resolve(comment_state: CommentState, status: ObjectiveStatus) -> Self {
        match comment_state {
            CommentState::Active => Self::Active,
            CommentState::Closed => Self::Closed,
            CommentState::Smart => match status {
                ObjectiveStatus::Worsened => Self::Active,
                ObjectiveStatus::Achieved
                | ObjectiveStatus::Improved
                | ObjectiveStatus::Unchanged
                | ObjectiveStatus::Unknown => Self::Closed,
            },
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for ThreadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
