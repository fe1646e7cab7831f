use std::path::PathBuf;

use thiserror::Error;
use verbo_core::{CoreError, Language, Tense};

#[derive(Debug, Error)]
pub enum RulesError {
    #[error("io error reading '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("json parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("no indicative conjugations found for '{0}'")]
    NoConjugations(String),
    #[error("no rule table for tense '{tense}' in language '{language}'")]
    UnsupportedTense { language: Language, tense: Tense },
    #[error("no conjugation rules for language '{0}'")]
    UnsupportedLanguage(Language),
    #[error("person '{person}' is not valid for language '{language}'")]
    UnknownPerson { language: Language, person: String },
}
