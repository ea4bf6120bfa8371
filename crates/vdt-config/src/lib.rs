//! # vdt-config
//!
//! Layered configuration loading for Verdict using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`VERDICT_*` prefix, `__` as separator)
//! 2. Project-level `.verdict/config.toml`
//! 3. User-level `~/.config/verdict/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `VERDICT_PUBLISH__RUN_MODE` -> `publish.run_mode`,
//! `VERDICT_OBJECTIVE__TARGET_RATING` -> `objective.target_rating`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! The Azure DevOps pipeline variables (`SYSTEM_*`, `BUILD_*`) are a
//! separate concern: they come from the CI runtime, not from the user, and
//! are read into [`AzureDevOpsEnv`] instead of the figment chain.

mod azure;
mod error;
mod objective;
mod publish;

pub use azure::{
    ACCESS_TOKEN_VAR, AzureDevOpsEnv, COLLECTION_URI_VAR, PROJECT_ID_VAR, PULL_REQUEST_ID_VAR,
    REPOSITORY_NAME_VAR,
};
pub use error::ConfigError;
pub use objective::ObjectiveConfig;
pub use publish::PublishConfig;

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use vdt_core::enums::{CommentState, RunMode};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VerdictConfig {
    #[serde(default)]
    pub publish: PublishConfig,
    #[serde(default)]
    pub objective: ObjectiveConfig,
}

/// Flattened options handed to every report destination.
///
/// One value object per run, assembled from the config sections (plus any
/// CLI overrides applied by the caller before flattening).
#[derive(Debug, Clone)]
pub struct PublishOptions {
    pub output_dir: PathBuf,
    pub run_mode: RunMode,
    pub comment_state: CommentState,
    pub target_rating: f64,
}

impl VerdictConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract().map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` to load the `.env` file from the workspace root before
    /// building the figment. This is the typical entry point for the CLI.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is out of range.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".verdict/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("VERDICT_").split("__"));

        figment
    }

    /// Flatten the config sections into per-run publish options.
    #[must_use]
    pub fn publish_options(&self) -> PublishOptions {
        PublishOptions {
            output_dir: self.publish.output_dir.clone(),
            run_mode: self.publish.run_mode,
            comment_state: self.publish.comment_state,
            target_rating: self.objective.target_rating,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let target = self.objective.target_rating;
        if !(1.0..=5.0).contains(&target) {
            return Err(ConfigError::InvalidValue {
                field: "objective.target_rating".to_string(),
                reason: format!("{target} is outside the 1.0-5.0 rating scale"),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("verdict").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or current dir
    /// looking for a `.env` file. Silently does nothing if no `.env` is
    /// found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // Walk up at most 3 levels (crate -> crates/ -> workspace root)
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        // Fallback: try current directory
        let _ = dotenvy::dotenv();
    }
}
