//! Report dispatch.
//!
//! The orchestrator iterates over the configured destinations once per run,
//! in a fixed order, and stops at the first hard error. Destinations that do
//! not apply skip themselves.

use std::sync::Arc;

use vdt_config::{AzureDevOpsEnv, PublishOptions};
use vdt_core::feedback::Feedback;
use vdt_core::log::LogSink;

use crate::azure::AzurePullRequestReport;
use crate::error::ReportError;
use crate::summary::TerminalSummaryReport;
use crate::Report;

/// A configured report destination.
pub enum Destination {
    TerminalSummary(TerminalSummaryReport),
    AzurePullRequest(AzurePullRequestReport),
}

impl Destination {
    #[must_use]
    pub fn is_supported(&self, options: &PublishOptions) -> bool {
        match self {
            Self::TerminalSummary(report) => report.is_supported(options),
            Self::AzurePullRequest(report) => report.is_supported(options),
        }
    }

    /// # Errors
    ///
    /// Propagates the destination's `ReportError`.
    pub async fn generate(
        &self,
        analysis_id: &str,
        feedback: &Feedback,
        options: &PublishOptions,
    ) -> Result<(), ReportError> {
        match self {
            Self::TerminalSummary(report) => {
                report.generate(analysis_id, feedback, options).await
            }
            Self::AzurePullRequest(report) => {
                report.generate(analysis_id, feedback, options).await
            }
        }
    }
}

/// Build the destination list for one run: summary first so the terminal
/// shows the outcome even when publishing fails afterwards.
#[must_use]
pub fn configured(env: AzureDevOpsEnv, log: &Arc<dyn LogSink>) -> Vec<Destination> {
    vec![
        Destination::TerminalSummary(TerminalSummaryReport::new(Arc::clone(log))),
        Destination::AzurePullRequest(AzurePullRequestReport::new(env, Arc::clone(log))),
    ]
}

/// Run every destination in order.
///
/// # Errors
///
/// Propagates the first hard `ReportError`; destinations after it do not
/// run.
pub async fn run_all(
    destinations: &[Destination],
    analysis_id: &str,
    feedback: &Feedback,
    options: &PublishOptions,
) -> Result<(), ReportError> {
    for destination in destinations {
        destination.generate(analysis_id, feedback, options).await?;
    }
    Ok(())
}
