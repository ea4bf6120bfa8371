//! Quality objective configuration.

use serde::{Deserialize, Serialize};

/// Default target on the 1.0–5.0 rating scale.
const fn default_target_rating() -> f64 {
    3.5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObjectiveConfig {
    /// New-code rating the change must reach for the objective to count as
    /// achieved.
    #[serde(default = "default_target_rating")]
    pub target_rating: f64,
}

impl Default for ObjectiveConfig {
    fn default() -> Self {
        Self {
            target_rating: default_target_rating(),
        }
    }
}
