//! # verbo-config
//!
//! Layered configuration loading for verbo using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`VERBO_*` prefix, `__` as separator)
//! 2. Project-level `.verbo/config.toml`
//! 3. User-level `~/.config/verbo/config.toml`
//! 4. Built-in defaults
//!
//! `VERBO_CATALOG__PATH` maps to `catalog.path`,
//! `VERBO_ANALYSIS__PREVIEW_FORMS` to `analysis.preview_forms`, and so on.
//!
//! ```no_run
//! use verbo_config::VerboConfig;
//!
//! let config = VerboConfig::load_with_dotenv().expect("config");
//! println!("verb database: {}", config.catalog.path().display());
//! ```

mod analysis;
mod catalog;
mod error;
mod general;

pub use analysis::AnalysisConfig;
pub use catalog::CatalogConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG: &str = ".verbo/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VerboConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl VerboConfig {
    /// Load and validate configuration from TOML files and environment
    /// variables. `.env` files are not read; see [`VerboConfig::load_with_dotenv`].
    ///
    /// # Errors
    ///
    /// [`ConfigError::Figment`] when a source cannot be parsed,
    /// [`ConfigError::InvalidValue`] when a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// [`VerboConfig::load`] after loading `.env` from the working directory.
    ///
    /// # Errors
    ///
    /// Same as [`VerboConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is fine.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate from an arbitrary provider chain.
    ///
    /// # Errors
    ///
    /// Same as [`VerboConfig::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(PROJECT_CONFIG);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("VERBO_").split("__"))
    }

    /// # Errors
    ///
    /// Returns the first [`ConfigError::InvalidValue`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.analysis.validate()?;
        self.general.validate()
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("verbo").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = VerboConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.catalog.path, "verbs.json");
    }

    #[test]
    fn figment_builds_without_files() {
        let config: VerboConfig = VerboConfig::figment()
            .extract()
            .expect("should extract defaults");
        assert_eq!(config.analysis.preview_forms, 3);
    }
}
