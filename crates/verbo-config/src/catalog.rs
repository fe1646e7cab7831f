//! Verb database locations.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "verbs.json".to_string()
}

fn default_raw_dir() -> String {
    "data/raw_verbs".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Verb database file. Relative paths resolve against the working directory.
    #[serde(default = "default_path")]
    pub path: String,

    /// Directory scanned by `verbo import`.
    #[serde(default = "default_raw_dir")]
    pub raw_dir: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            raw_dir: default_raw_dir(),
        }
    }
}

impl CatalogConfig {
    #[must_use]
    pub fn path(&self) -> PathBuf {
        PathBuf::from(&self.path)
    }

    #[must_use]
    pub fn raw_dir(&self) -> PathBuf {
        PathBuf::from(&self.raw_dir)
    }
}
