//! # vdt-reports
//!
//! Report destinations for Verdict. Every destination receives the same
//! inputs (an analysis id, the structured feedback, and the per-run publish
//! options) and decides for itself whether it applies to the current run.
//! A destination that does not apply skips silently; many CI runs
//! legitimately have nowhere to publish (no pull request, wrong run mode).

pub mod azure;
pub mod dispatch;
pub mod error;
pub mod summary;

pub use error::ReportError;

use vdt_config::PublishOptions;
use vdt_core::feedback::Feedback;

/// File name of the rendered feedback artifact inside the output directory.
///
/// The content is opaque to every destination: it is read as UTF-8 text and
/// forwarded verbatim, never parsed.
pub const FEEDBACK_MARKDOWN_FILE: &str = "feedback.md";

/// A pluggable report destination.
#[allow(async_fn_in_trait)]
pub trait Report {
    /// Pure applicability predicate. No side effects.
    fn is_supported(&self, options: &PublishOptions) -> bool;

    /// Publish the feedback to this destination.
    ///
    /// Returns `Ok(())` both on success and on a silent skip; completion is
    /// the entire contract. Hard errors are reserved for conditions the
    /// caller should treat as a failed CI step.
    ///
    /// # Errors
    ///
    /// Returns `ReportError` on misconfigured pipeline variables, artifact
    /// read failures, or connection-level transport failures.
    async fn generate(
        &self,
        analysis_id: &str,
        feedback: &Feedback,
        options: &PublishOptions,
    ) -> Result<(), ReportError>;
}
