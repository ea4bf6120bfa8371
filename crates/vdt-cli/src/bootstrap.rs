use anyhow::Context;

/// Load layered configuration, including `.env` file support.
pub fn load_config() -> anyhow::Result<vdt_config::VerdictConfig> {
    let config = vdt_config::VerdictConfig::load_with_dotenv()
        .context("failed to load verdict configuration")?;
    tracing::debug!(
        run_mode = %config.publish.run_mode,
        comment_state = %config.publish.comment_state,
        "configuration loaded",
    );
    Ok(config)
}
