use std::path::{Path, PathBuf};

use anyhow::Context;
use verbo_catalog::VerbCatalog;
use verbo_config::VerboConfig;

use crate::cli::GlobalFlags;

/// Configuration plus the resolved verb database location.
pub struct AppContext {
    pub config: VerboConfig,
    pub catalog_path: PathBuf,
}

impl AppContext {
    pub fn init(flags: &GlobalFlags) -> anyhow::Result<Self> {
        let config = VerboConfig::load_with_dotenv().context("failed to load verbo configuration")?;
        Ok(Self::with_config(config, flags))
    }

    pub fn with_config(config: VerboConfig, flags: &GlobalFlags) -> Self {
        let catalog_path = flags
            .catalog
            .clone()
            .unwrap_or_else(|| config.catalog.path());
        tracing::debug!(catalog = %catalog_path.display(), "resolved verb database path");
        Self {
            config,
            catalog_path,
        }
    }

    /// The verb database, or the built-in list when the file does not exist yet.
    pub fn catalog(&self) -> anyhow::Result<VerbCatalog> {
        VerbCatalog::load_or_default(&self.catalog_path).with_context(|| {
            format!(
                "failed to load verb database {}",
                self.catalog_path.display()
            )
        })
    }

    /// The verb database file, which must exist.
    pub fn catalog_file(&self) -> anyhow::Result<VerbCatalog> {
        load_catalog_file(&self.catalog_path)
    }

    pub fn default_limit(&self) -> u32 {
        self.config.general.default_limit
    }
}

pub fn load_catalog_file(path: &Path) -> anyhow::Result<VerbCatalog> {
    VerbCatalog::load(path)
        .with_context(|| format!("failed to load verb database {}", path.display()))
}
