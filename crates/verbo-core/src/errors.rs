//! Cross-cutting error types for verbo.
//!
//! Domain-specific errors (`RulesError`, `CatalogError`, `ConfigError`) live in
//! their own crates. They converge into `anyhow` in `verbo-cli`.

use thiserror::Error;

/// Errors that can be raised by any verbo crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A tense name outside the known set.
    #[error("Unknown tense: '{0}'")]
    UnknownTense(String),

    /// A conjugation group tag outside ARE/ERE/IRE/OTHER.
    #[error("Unknown verb group: '{0}'")]
    UnknownGroup(String),

    /// A language code outside it/fr/de.
    #[error("Unknown language: '{0}'")]
    UnknownLanguage(String),

    /// Data failed validation (empty infinitive, malformed input).
    #[error("Validation error: {0}")]
    Validation(String),
}
