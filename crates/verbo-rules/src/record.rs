//! Conjugation records as exported by the full conjugation engine.
//!
//! ```json
//! {
//!   "word": "andare",
//!   "conjugations": [
//!     { "group": "indicative/present", "value": "vado" },
//!     { "group": "indicative/present", "value": "vai" }
//!   ]
//! }
//! ```
//!
//! Values are grouped per tense in input order. Only the four indicative
//! tags with a regular rule are kept.

use std::path::Path;

use serde::{Deserialize, Serialize};
use verbo_core::{ConjugationTable, Tense, VerbAnalysis, VerbIdentity};

use crate::error::RulesError;
use crate::reporter;

/// Infinitive used when a record names neither `word` nor `description`.
pub const UNKNOWN_VERB: &str = "unknown";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConjugationEntry {
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConjugationRecord {
    #[serde(default)]
    pub word: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub conjugations: Vec<ConjugationEntry>,
}

/// Tense for an engine tag, `None` for tags outside the analyzed set.
#[must_use]
pub fn tense_for_tag(tag: &str) -> Option<Tense> {
    match tag {
        "indicative/present" => Some(Tense::Presente),
        "indicative/imperfect" => Some(Tense::Imperfetto),
        "indicative/future" => Some(Tense::Futuro),
        "indicative/pasthistoric" => Some(Tense::PassatoRemoto),
        _ => None,
    }
}

impl ConjugationRecord {
    /// # Errors
    ///
    /// Returns [`RulesError::Json`] when the text is not a record object.
    pub fn from_json_str(text: &str) -> Result<Self, RulesError> {
        Ok(serde_json::from_str(text)?)
    }

    /// # Errors
    ///
    /// Returns [`RulesError::Io`] if the file cannot be read, or
    /// [`RulesError::Json`] if it is not a record object.
    pub fn from_path(path: &Path) -> Result<Self, RulesError> {
        let text = std::fs::read_to_string(path).map_err(|source| RulesError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// `word`, falling back to `description`, then [`UNKNOWN_VERB`].
    #[must_use]
    pub fn infinitive(&self) -> &str {
        self.word
            .as_deref()
            .or(self.description.as_deref())
            .unwrap_or(UNKNOWN_VERB)
    }

    /// Observed forms of the analyzed tenses, in record order.
    #[must_use]
    pub fn observed(&self) -> ConjugationTable {
        let mut table = ConjugationTable::new();
        for entry in &self.conjugations {
            match tense_for_tag(&entry.group) {
                Some(tense) => table.push(tense, entry.value.clone()),
                None => tracing::trace!(tag = %entry.group, "ignoring conjugation tag"),
            }
        }
        table
    }
}

/// Analyze one record.
///
/// The infinitive is trimmed and lower-cased before its root and group are
/// derived, so `"Andare"` is reported as `andare` with `ando, andi, ...` as
/// the regular presente.
///
/// # Errors
///
/// Returns [`RulesError::NoConjugations`] when none of the four analyzed tags
/// occur, and [`RulesError::Core`] when the infinitive is empty or not a
/// single word.
pub fn analyze_record(record: &ConjugationRecord) -> Result<VerbAnalysis, RulesError> {
    let observed = record.observed();
    if observed.is_empty() {
        return Err(RulesError::NoConjugations(record.infinitive().to_string()));
    }
    let identity = VerbIdentity::parse(record.infinitive())?;
    Ok(reporter::analyze(identity, &observed))
}
