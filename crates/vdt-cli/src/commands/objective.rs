use anyhow::Context;
use vdt_config::VerdictConfig;
use vdt_core::feedback::{FEEDBACK_JSON_FILE, Feedback};
use vdt_core::objective;

use crate::cli::{GlobalFlags, ObjectiveArgs};

/// Handle `vdt objective`.
pub fn handle(
    args: &ObjectiveArgs,
    _flags: &GlobalFlags,
    config: &VerdictConfig,
) -> anyhow::Result<()> {
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| config.publish.output_dir.clone());

    let feedback_path = output_dir.join(FEEDBACK_JSON_FILE);
    let feedback = Feedback::from_file(&feedback_path).with_context(|| {
        format!(
            "failed to load analysis feedback from {}",
            feedback_path.display()
        )
    })?;

    let status = objective::determine_status(&feedback, config.objective.target_rating);
    println!("{status}");
    Ok(())
}
