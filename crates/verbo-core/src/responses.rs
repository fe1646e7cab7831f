//! CLI response types returned as JSON by `verbo` commands.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::analysis::VerbAnalysis;
use crate::entities::{CatalogFormat, MarkOutcome, VerbInfo};
use crate::enums::{Language, Tense};

/// An input file that could not be analyzed.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SkippedInput {
    pub path: String,
    pub reason: String,
}

/// Response from `verbo analyze`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AnalyzeResponse {
    pub files_checked: usize,
    pub verbs: Vec<VerbAnalysis>,
    pub irregular_verbs: usize,
    pub skipped: Vec<SkippedInput>,
    /// Batch of `verbo mark` commands, one per irregular verb.
    pub commands: Vec<String>,
}

/// Response from `verbo info`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct VerbInfoResponse {
    pub verb: VerbInfo,
}

/// Response from `verbo mark`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MarkResponse {
    pub outcome: MarkOutcome,
    /// `None` when nothing changed and the file was left untouched.
    pub saved_to: Option<String>,
}

/// Response from `verbo list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct VerbListResponse {
    pub group: String,
    pub tense: Option<Tense>,
    pub verbs: Vec<String>,
    pub total: usize,
}

/// Response from `verbo groups`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GroupCountsResponse {
    pub format: CatalogFormat,
    pub counts: BTreeMap<String, usize>,
}

/// Response from `verbo migrate`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MigrateResponse {
    pub total_verbs: usize,
    pub output: String,
}

/// Response from `verbo import`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ImportResponse {
    pub files_processed: usize,
    pub total_verbs: usize,
    pub counts: BTreeMap<String, usize>,
    pub output: String,
}

/// One person of a conjugated tense.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PersonForm {
    pub person: String,
    pub form: String,
}

/// A conjugated tense.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ConjugatedTense {
    pub tense: Tense,
    pub forms: Vec<PersonForm>,
}

/// Response from `verbo conjugate`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ConjugateResponse {
    pub verb: String,
    pub language: Language,
    pub tenses: Vec<ConjugatedTense>,
}

/// Response from `verbo check`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CheckResponse {
    pub correct: bool,
    pub correct_answer: String,
    pub your_answer: String,
}

/// Response from `verbo quiz`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuizResponse {
    pub verb: String,
    pub person: String,
    pub tense: Tense,
    /// Group filter the verb was drawn from (`ARE`, `REGULAR`, `IRREGULAR`, ...).
    pub group: String,
    /// Whether the database lists the verb as irregular in `tense`.
    pub is_irregular: bool,
}
