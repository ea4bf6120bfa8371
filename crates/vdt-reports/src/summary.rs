//! Terminal summary destination.
//!
//! Writes the rating summary and objective outcome through the log sink.
//! Applies in every run mode; a run whose analysis produced no ratings has
//! nothing to summarize and skips silently.

use std::sync::Arc;

use vdt_config::PublishOptions;
use vdt_core::feedback::Feedback;
use vdt_core::log::LogSink;
use vdt_core::objective;

use crate::error::ReportError;
use crate::Report;

pub struct TerminalSummaryReport {
    log: Arc<dyn LogSink>,
}

impl TerminalSummaryReport {
    #[must_use]
    pub fn new(log: Arc<dyn LogSink>) -> Self {
        Self { log }
    }
}

impl Report for TerminalSummaryReport {
    fn is_supported(&self, _options: &PublishOptions) -> bool {
        true
    }

    async fn generate(
        &self,
        analysis_id: &str,
        feedback: &Feedback,
        options: &PublishOptions,
    ) -> Result<(), ReportError> {
        if !feedback.has_ratings() {
            return Ok(());
        }

        if let Some(new_code) = feedback.new_code_rating {
            self.log.log(&format!(
                "New code rating: {new_code:.1} (target {:.1})",
                options.target_rating
            ));
        }
        if let Some(baseline) = feedback.baseline_rating {
            self.log.log(&format!("Baseline rating: {baseline:.1}"));
        }

        let status = objective::determine_status(feedback, options.target_rating);
        self.log
            .log(&format!("Quality objective {status} for analysis {analysis_id}"));

        Ok(())
    }
}
