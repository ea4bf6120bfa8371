use std::sync::Arc;

use anyhow::Context;
use vdt_config::{AzureDevOpsEnv, VerdictConfig};
use vdt_core::enums::{ObjectiveStatus, RunMode};
use vdt_core::feedback::{FEEDBACK_JSON_FILE, Feedback};
use vdt_core::log::{LogSink, StdoutSink};
use vdt_core::objective;

use crate::cli::{GlobalFlags, ReportArgs};

/// Handle `vdt report`.
pub async fn handle(
    args: &ReportArgs,
    _flags: &GlobalFlags,
    config: &VerdictConfig,
) -> anyhow::Result<()> {
    let mut config = config.clone();
    if let Some(dir) = &args.output_dir {
        config.publish.output_dir = dir.clone();
    }
    if let Some(mode) = args.run_mode {
        config.publish.run_mode = mode;
    }
    if let Some(state) = args.comment_state {
        config.publish.comment_state = state;
    }
    let options = config.publish_options();

    let feedback_path = options.output_dir.join(FEEDBACK_JSON_FILE);
    let feedback = Feedback::from_file(&feedback_path).with_context(|| {
        format!(
            "failed to load analysis feedback from {}",
            feedback_path.display()
        )
    })?;

    let log: Arc<dyn LogSink> = Arc::new(StdoutSink);
    let destinations = vdt_reports::dispatch::configured(AzureDevOpsEnv::from_env(), &log);
    vdt_reports::dispatch::run_all(&destinations, &args.analysis_id, &feedback, &options)
        .await
        .context("failed to publish reports")?;

    // Gating modes fail the step unless the change met the target or at
    // least moved toward it.
    if options.run_mode != RunMode::FeedbackOnly {
        let status = objective::determine_status(&feedback, options.target_rating);
        if !matches!(
            status,
            ObjectiveStatus::Achieved | ObjectiveStatus::Improved
        ) {
            anyhow::bail!(
                "quality objective {status} (target {:.1})",
                options.target_rating
            );
        }
    }

    Ok(())
}
