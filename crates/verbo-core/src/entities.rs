//! Verb database entities.
//!
//! The on-disk catalog stores, per verb, the list of tenses known to be
//! irregular. An empty list means the verb conjugates regularly everywhere.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Tense, VerbGroup};

/// One verb of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct VerbEntry {
    pub infinitive: String,
    pub group: VerbGroup,
    #[serde(default)]
    pub irregular_tenses: Vec<Tense>,
}

impl VerbEntry {
    #[must_use]
    pub fn new(infinitive: impl Into<String>, group: VerbGroup) -> Self {
        Self {
            infinitive: infinitive.into(),
            group,
            irregular_tenses: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_irregular_for(&self, tense: Tense) -> bool {
        self.irregular_tenses.contains(&tense)
    }

    #[must_use]
    pub fn is_fully_regular(&self) -> bool {
        self.irregular_tenses.is_empty()
    }
}

/// Direction of an irregularity mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MarkMode {
    Irregular,
    Regular,
}

/// Effect of marking one tense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TenseChange {
    pub tense: Tense,
    /// `false` when the tense already had the requested state.
    pub changed: bool,
}

/// Result of marking tenses on one verb.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MarkOutcome {
    pub infinitive: String,
    pub mode: MarkMode,
    pub changes: Vec<TenseChange>,
    /// Irregular tenses after the update, sorted.
    pub irregular_tenses: Vec<Tense>,
}

impl MarkOutcome {
    #[must_use]
    pub fn changed_any(&self) -> bool {
        self.changes.iter().any(|change| change.changed)
    }
}

/// On-disk layout of the verb database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CatalogFormat {
    /// Group name → verb list, with `ONREGELMATIG` for irregular verbs.
    Legacy,
    /// `verbs: [{ infinitive, group, irregular_tenses }]`.
    Current,
}

/// What the catalog knows about one verb.
///
/// Legacy catalogs only know verb-level irregularity (`irregular`); current
/// ones know it per tense (`irregular_tenses`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct VerbInfo {
    pub infinitive: String,
    /// Group label as stored; legacy catalogs may say `ONREGELMATIG`.
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub irregular_tenses: Option<Vec<Tense>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub irregular: Option<bool>,
    pub format: CatalogFormat,
}
