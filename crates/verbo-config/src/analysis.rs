//! Mismatch report rendering.

use serde::{Deserialize, Serialize};
use verbo_core::PERSONS;

use crate::error::ConfigError;

const fn default_preview_forms() -> usize {
    3
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisConfig {
    /// How many actual/expected forms a text report shows per tense.
    #[serde(default = "default_preview_forms")]
    pub preview_forms: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            preview_forms: default_preview_forms(),
        }
    }
}

impl AnalysisConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] unless `preview_forms` is in `1..=6`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=PERSONS).contains(&self.preview_forms) {
            return Err(ConfigError::invalid(
                "analysis.preview_forms",
                format!("must be between 1 and {PERSONS}, got {}", self.preview_forms),
            ));
        }
        Ok(())
    }
}
