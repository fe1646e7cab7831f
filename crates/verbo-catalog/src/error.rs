use std::path::PathBuf;

use thiserror::Error;
use verbo_core::{CoreError, Tense};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("io error at '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("json parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed verb database: {0}")]
    Malformed(String),
    #[error("verb '{0}' not found in database")]
    UnknownVerb(String),
    #[error("database is in the legacy format; run `verbo migrate` first")]
    LegacyFormat,
    #[error("database is already in the current format")]
    AlreadyCurrent,
    #[error("raw verb directory '{0}' does not exist")]
    MissingDirectory(PathBuf),
    #[error("no JSON files found in '{0}'")]
    NoRawFiles(PathBuf),
    #[error("no verbs in group '{group}' for tense '{tense}'")]
    NoQuizCandidates { group: String, tense: Tense },
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl CatalogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
