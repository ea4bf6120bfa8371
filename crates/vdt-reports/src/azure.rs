//! Azure DevOps pull request feedback publisher.
//!
//! Posts the rendered feedback artifact as a new comment thread on the pull
//! request that triggered the pipeline, using the predefined Azure Pipelines
//! variables for addressing and authentication. One request per run, no
//! retries; an HTTP error response is logged and swallowed so a rejected
//! comment never fails the build.

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use vdt_config::{
    ACCESS_TOKEN_VAR, AzureDevOpsEnv, COLLECTION_URI_VAR, PROJECT_ID_VAR, PULL_REQUEST_ID_VAR,
    PublishOptions, REPOSITORY_NAME_VAR,
};
use vdt_core::enums::{RunMode, ThreadState};
use vdt_core::feedback::Feedback;
use vdt_core::log::LogSink;
use vdt_core::objective;

use crate::error::ReportError;
use crate::{FEEDBACK_MARKDOWN_FILE, Report};

/// Threads API version this publisher speaks.
pub const AZURE_API_VERSION: &str = "6.0";

/// One comment inside a new thread. Parent id 0 marks a top-level comment;
/// the artifact text goes in verbatim.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ThreadComment {
    parent_comment_id: u32,
    content: String,
    comment_type: &'static str,
}

#[derive(Debug, Serialize)]
struct CommentThread {
    comments: Vec<ThreadComment>,
    status: ThreadState,
}

/// Publishes the feedback artifact onto the triggering pull request.
pub struct AzurePullRequestReport {
    env: AzureDevOpsEnv,
    client: reqwest::Client,
    log: Arc<dyn LogSink>,
}

impl AzurePullRequestReport {
    #[must_use]
    pub fn new(env: AzureDevOpsEnv, log: Arc<dyn LogSink>) -> Self {
        Self {
            env,
            client: reqwest::Client::new(),
            log,
        }
    }

    fn require<'a>(value: Option<&'a str>, name: &'static str) -> Result<&'a str, ReportError> {
        value.ok_or(ReportError::MissingVariable { name })
    }

    /// REST endpoint for opening a comment thread on the pull request.
    ///
    /// The collection URI carries its own trailing slash, so the segments
    /// concatenate directly.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::MissingVariable` for any absent pipeline
    /// variable. The applicability gate does not cover the collection URI,
    /// project id, or repository name, so a run can pass the gate and still
    /// fail here.
    fn thread_url(&self) -> Result<String, ReportError> {
        let collection = Self::require(self.env.collection_uri.as_deref(), COLLECTION_URI_VAR)?;
        let project = Self::require(self.env.project_id.as_deref(), PROJECT_ID_VAR)?;
        let repository = Self::require(self.env.repository_name.as_deref(), REPOSITORY_NAME_VAR)?;
        let pull_request =
            Self::require(self.env.pull_request_id.as_deref(), PULL_REQUEST_ID_VAR)?;

        Ok(format!(
            "{collection}{project}/_apis/git/repositories/{repository}/pullRequests/{pull_request}/threads?api-version={AZURE_API_VERSION}"
        ))
    }

    /// Serialize the thread payload: the artifact as a single top-level text
    /// comment, plus the resolved open/closed thread state.
    fn build_request_body(
        feedback_file: &Path,
        feedback: &Feedback,
        options: &PublishOptions,
    ) -> Result<Vec<u8>, ReportError> {
        let content = std::fs::read_to_string(feedback_file)?;
        let status = objective::determine_status(feedback, options.target_rating);

        let thread = CommentThread {
            comments: vec![ThreadComment {
                parent_comment_id: 0,
                content,
                comment_type: "text",
            }],
            status: ThreadState::resolve(options.comment_state, status),
        };

        Ok(serde_json::to_vec(&thread)?)
    }
}

impl Report for AzurePullRequestReport {
    /// Publishing applies only to feedback-only runs triggered by a pull
    /// request (credential and PR id both present).
    fn is_supported(&self, options: &PublishOptions) -> bool {
        self.env.has_pull_request() && options.run_mode == RunMode::FeedbackOnly
    }

    async fn generate(
        &self,
        _analysis_id: &str,
        feedback: &Feedback,
        options: &PublishOptions,
    ) -> Result<(), ReportError> {
        let feedback_file = options.output_dir.join(FEEDBACK_MARKDOWN_FILE);
        if !self.is_supported(options) || !feedback_file.exists() {
            return Ok(());
        }

        self.log.log("Sending feedback to Azure DevOps API");

        let body = Self::build_request_body(&feedback_file, feedback, options)?;
        let url = self.thread_url()?;
        let token = Self::require(self.env.access_token.as_deref(), ACCESS_TOKEN_VAR)?;
        tracing::debug!(target: "vdt::report", %url, "posting feedback thread");

        let response = self
            .client
            .post(&url)
            .header(reqwest::header::AUTHORIZATION, format!("Bearer {token}"))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        if response.status().is_success() {
            self.log.log("Published feedback to Azure DevOps");
        } else {
            let code = response.status().as_u16();
            let detail = response.text().await.unwrap_or_default();
            self.log
                .log(&format!("Warning: Azure DevOps API error: {code} / {detail}"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use vdt_core::enums::CommentState;

    use super::*;

    fn full_env() -> AzureDevOpsEnv {
        AzureDevOpsEnv {
            access_token: Some("secret-token".to_string()),
            pull_request_id: Some("42".to_string()),
            collection_uri: Some("https://dev.azure.com/contoso/".to_string()),
            project_id: Some("proj123".to_string()),
            repository_name: Some("web-app".to_string()),
        }
    }

    fn options(run_mode: RunMode, comment_state: CommentState) -> PublishOptions {
        PublishOptions {
            output_dir: "verdict-output".into(),
            run_mode,
            comment_state,
            target_rating: 3.5,
        }
    }

    fn report(env: AzureDevOpsEnv) -> AzurePullRequestReport {
        AzurePullRequestReport::new(env, Arc::new(vdt_core::log::BufferSink::new()))
    }

    #[test]
    fn supported_only_in_feedback_only_mode() {
        let report = report(full_env());
        assert!(report.is_supported(&options(RunMode::FeedbackOnly, CommentState::Active)));
        assert!(!report.is_supported(&options(RunMode::FeedbackAndGate, CommentState::Active)));
        assert!(!report.is_supported(&options(RunMode::GateOnly, CommentState::Active)));
    }

    #[test]
    fn unsupported_without_token_or_pull_request_id() {
        let mut env = full_env();
        env.access_token = None;
        assert!(!report(env).is_supported(&options(RunMode::FeedbackOnly, CommentState::Active)));

        let mut env = full_env();
        env.pull_request_id = None;
        assert!(!report(env).is_supported(&options(RunMode::FeedbackOnly, CommentState::Active)));
    }

    #[test]
    fn thread_url_follows_the_documented_template() {
        let url = report(full_env()).thread_url().unwrap();
        assert_eq!(
            url,
            "https://dev.azure.com/contoso/proj123/_apis/git/repositories/web-app/pullRequests/42/threads?api-version=6.0"
        );
    }

    #[test]
    fn thread_url_fails_on_missing_collection_uri() {
        let mut env = full_env();
        env.collection_uri = None;
        let error = report(env).thread_url().unwrap_err();
        assert!(
            matches!(error, ReportError::MissingVariable { name } if name == COLLECTION_URI_VAR)
        );
    }

    #[test]
    fn thread_url_fails_on_missing_repository_name() {
        let mut env = full_env();
        env.repository_name = None;
        let error = report(env).thread_url().unwrap_err();
        assert!(
            matches!(error, ReportError::MissingVariable { name } if name == REPOSITORY_NAME_VAR)
        );
    }

    #[test]
    fn request_body_carries_the_artifact_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = dir.path().join(FEEDBACK_MARKDOWN_FILE);
        let content = "## Quality report\n\n- rating went **up**\n";
        std::fs::write(&artifact, content).unwrap();

        let feedback = Feedback {
            baseline_rating: Some(3.0),
            new_code_rating: Some(3.2),
            ..Feedback::default()
        };
        let body = AzurePullRequestReport::build_request_body(
            &artifact,
            &feedback,
            &options(RunMode::FeedbackOnly, CommentState::Active),
        )
        .unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let comments = parsed["comments"].as_array().unwrap();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0]["parentCommentId"], 0);
        assert_eq!(comments[0]["commentType"], "text");
        assert_eq!(comments[0]["content"], content);
        assert_eq!(parsed["status"], "active");
    }

    #[test]
    fn smart_comment_state_closes_thread_for_improved_status() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = dir.path().join(FEEDBACK_MARKDOWN_FILE);
        std::fs::write(&artifact, "fine").unwrap();

        // Below target but above baseline: improved, so smart mode closes.
        let feedback = Feedback {
            baseline_rating: Some(2.8),
            new_code_rating: Some(3.2),
            ..Feedback::default()
        };
        let body = AzurePullRequestReport::build_request_body(
            &artifact,
            &feedback,
            &options(RunMode::FeedbackOnly, CommentState::Smart),
        )
        .unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed["status"], "closed");
    }

    #[test]
    fn smart_comment_state_keeps_thread_active_for_worsened_status() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = dir.path().join(FEEDBACK_MARKDOWN_FILE);
        std::fs::write(&artifact, "regressed").unwrap();

        let feedback = Feedback {
            baseline_rating: Some(3.4),
            new_code_rating: Some(2.9),
            ..Feedback::default()
        };
        let body = AzurePullRequestReport::build_request_body(
            &artifact,
            &feedback,
            &options(RunMode::FeedbackOnly, CommentState::Smart),
        )
        .unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed["status"], "active");
    }

    #[test]
    fn closed_comment_state_always_closes() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = dir.path().join(FEEDBACK_MARKDOWN_FILE);
        std::fs::write(&artifact, "regressed").unwrap();

        let feedback = Feedback {
            baseline_rating: Some(3.4),
            new_code_rating: Some(2.9),
            ..Feedback::default()
        };
        let body = AzurePullRequestReport::build_request_body(
            &artifact,
            &feedback,
            &options(RunMode::FeedbackOnly, CommentState::Closed),
        )
        .unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed["status"], "closed");
    }
}
