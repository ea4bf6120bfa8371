//! Structured analysis feedback.
//!
//! The upstream analysis step writes two artifacts into the output
//! directory: `feedback.json` (this model) and `feedback.md` (the rendered
//! report, treated as an opaque blob by report destinations).

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FeedbackError;

/// File name of the structured feedback inside the output directory.
pub const FEEDBACK_JSON_FILE: &str = "feedback.json";

/// Computed metrics for one analyzed change.
///
/// Ratings are on the 1.0–5.0 star scale, rounded to one decimal by the
/// analysis backend. Fields are optional because a first analysis has no
/// baseline and an empty change has no new-code rating.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Feedback {
    /// When the analysis ran.
    #[serde(default)]
    pub analysis_date: Option<DateTime<Utc>>,

    /// Rating of the code base before this change.
    #[serde(default)]
    pub baseline_rating: Option<f64>,

    /// Rating of the code touched by this change.
    #[serde(default)]
    pub new_code_rating: Option<f64>,

    /// Rating of the code base including this change.
    #[serde(default)]
    pub overall_rating: Option<f64>,

    /// Number of files the analysis covered.
    #[serde(default)]
    pub files_analyzed: u64,
}

impl Feedback {
    /// Load feedback from a `feedback.json` file.
    ///
    /// # Errors
    ///
    /// Returns `FeedbackError::Io` if the file cannot be read and
    /// `FeedbackError::Json` if it does not parse into this model.
    pub fn from_file(path: &Path) -> Result<Self, FeedbackError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Whether the analysis produced any rating at all.
    #[must_use]
    pub const fn has_ratings(&self) -> bool {
        self.baseline_rating.is_some()
            || self.new_code_rating.is_some()
            || self.overall_rating.is_some()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_full_feedback_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feedback.json");
        std::fs::write(
            &path,
            r#"{
                "analysis_date": "2026-08-07T10:30:00Z",
                "baseline_rating": 3.2,
                "new_code_rating": 3.8,
                "overall_rating": 3.3,
                "files_analyzed": 17
            }"#,
        )
        .unwrap();

        let feedback = Feedback::from_file(&path).unwrap();
        assert_eq!(feedback.baseline_rating, Some(3.2));
        assert_eq!(feedback.new_code_rating, Some(3.8));
        assert_eq!(feedback.overall_rating, Some(3.3));
        assert_eq!(feedback.files_analyzed, 17);
        assert!(feedback.has_ratings());
    }

    #[test]
    fn missing_fields_default_to_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feedback.json");
        std::fs::write(&path, "{}").unwrap();

        let feedback = Feedback::from_file(&path).unwrap();
        assert_eq!(feedback.baseline_rating, None);
        assert_eq!(feedback.new_code_rating, None);
        assert_eq!(feedback.files_analyzed, 0);
        assert!(!feedback.has_ratings());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Feedback::from_file(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(FeedbackError::Io(_))));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feedback.json");
        std::fs::write(&path, "not json").unwrap();

        let result = Feedback::from_file(&path);
        assert!(matches!(result, Err(FeedbackError::Json(_))));
    }
}
