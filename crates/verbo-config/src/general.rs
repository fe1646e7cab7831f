//! General application configuration.

use serde::{Deserialize, Serialize};
use verbo_core::Language;

use crate::error::ConfigError;

/// Default result limit.
const fn default_limit() -> u32 {
    50
}

fn default_language() -> String {
    "it".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Language for `conjugate` and `check` when none is given (`it`, `de`, ...).
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            default_limit: default_limit(),
        }
    }
}

impl GeneralConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an unknown language.
    pub fn language(&self) -> Result<Language, ConfigError> {
        self.default_language
            .parse()
            .map_err(|err: verbo_core::CoreError| {
                ConfigError::invalid("general.default_language", err.to_string())
            })
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an unknown language or a zero limit.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.language()?;
        if self.default_limit == 0 {
            return Err(ConfigError::invalid(
                "general.default_limit",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}
