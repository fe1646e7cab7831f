//! Conjugation tables and the sparse mismatch report.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Tense, VerbGroup};
use crate::identity::VerbIdentity;

/// Command that marks tenses irregular in the verb database.
pub const MARK_COMMAND: &str = "verbo mark";

// ---------------------------------------------------------------------------
// ConjugationTable
// ---------------------------------------------------------------------------

/// Tense → ordered person forms.
///
/// Used both for observed conjugations (any length, input order preserved)
/// and for generated canonical ones (six forms, or none when the group has no
/// rule for the tense).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct ConjugationTable(BTreeMap<Tense, Vec<String>>);

impl ConjugationTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the forms of a tense.
    pub fn insert(&mut self, tense: Tense, forms: Vec<String>) {
        self.0.insert(tense, forms);
    }

    /// Append one form to a tense, creating the tense on first use.
    pub fn push(&mut self, tense: Tense, form: impl Into<String>) {
        self.0.entry(tense).or_default().push(form.into());
    }

    #[must_use]
    pub fn get(&self, tense: Tense) -> Option<&[String]> {
        self.0.get(&tense).map(Vec::as_slice)
    }

    #[must_use]
    pub fn contains(&self, tense: Tense) -> bool {
        self.0.contains_key(&tense)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Tense, &[String])> {
        self.0.iter().map(|(tense, forms)| (*tense, forms.as_slice()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<(Tense, Vec<String>)> for ConjugationTable {
    fn from_iter<I: IntoIterator<Item = (Tense, Vec<String>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// ---------------------------------------------------------------------------
// MismatchReport
// ---------------------------------------------------------------------------

/// Deviation of one tense from its regular pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TenseMismatch {
    /// Positions (of the first six) whose normalized forms differ.
    pub mismatch_count: usize,
    pub actual_forms: Vec<String>,
    pub expected_forms: Vec<String>,
}

/// Sparse view of the irregular tenses of one verb.
///
/// A tense appears only when it could be compared and at least one position
/// differed; an empty report means "nothing irregular found".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct MismatchReport(BTreeMap<Tense, TenseMismatch>);

impl MismatchReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, tense: Tense, mismatch: TenseMismatch) {
        self.0.insert(tense, mismatch);
    }

    #[must_use]
    pub fn get(&self, tense: Tense) -> Option<&TenseMismatch> {
        self.0.get(&tense)
    }

    #[must_use]
    pub fn contains(&self, tense: Tense) -> bool {
        self.0.contains_key(&tense)
    }

    /// Irregular tenses in report order.
    pub fn tenses(&self) -> impl Iterator<Item = Tense> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Tense, &TenseMismatch)> {
        self.0.iter().map(|(tense, mismatch)| (*tense, mismatch))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

// ---------------------------------------------------------------------------
// VerbAnalysis
// ---------------------------------------------------------------------------

/// Mismatch report of one verb, with the identity it was computed for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct VerbAnalysis {
    pub infinitive: String,
    pub root: String,
    pub group: VerbGroup,
    pub report: MismatchReport,
}

impl VerbAnalysis {
    #[must_use]
    pub fn new(identity: VerbIdentity, report: MismatchReport) -> Self {
        Self {
            infinitive: identity.infinitive,
            root: identity.root,
            group: identity.group,
            report,
        }
    }

    #[must_use]
    pub fn is_irregular(&self) -> bool {
        !self.report.is_empty()
    }

    #[must_use]
    pub fn irregular_tenses(&self) -> Vec<Tense> {
        self.report.tenses().collect()
    }

    /// Command that records the irregular tenses in the verb database.
    ///
    /// `None` when the verb is regular in every analyzed tense.
    #[must_use]
    pub fn remediation_command(&self) -> Option<String> {
        if self.report.is_empty() {
            return None;
        }
        let tenses = self
            .report
            .tenses()
            .map(Tense::as_str)
            .collect::<Vec<_>>()
            .join(" ");
        Some(format!("{MARK_COMMAND} {} {tenses}", self.infinitive))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn mismatch(count: usize) -> TenseMismatch {
        TenseMismatch {
            mismatch_count: count,
            actual_forms: vec![],
            expected_forms: vec![],
        }
    }

    #[test]
    fn push_groups_forms_in_input_order() {
        let mut table = ConjugationTable::new();
        table.push(Tense::Presente, "vado");
        table.push(Tense::Futuro, "andrò");
        table.push(Tense::Presente, "vai");
        assert_eq!(table.get(Tense::Presente).unwrap(), ["vado", "vai"]);
        assert_eq!(table.len(), 2);
        assert!(!table.contains(Tense::Imperfetto));
    }

    #[test]
    fn report_iterates_in_tense_order() {
        let mut report = MismatchReport::new();
        report.insert(Tense::PassatoRemoto, mismatch(6));
        report.insert(Tense::Presente, mismatch(4));
        report.insert(Tense::Futuro, mismatch(6));
        let tenses: Vec<_> = report.tenses().collect();
        assert_eq!(
            tenses,
            vec![Tense::Presente, Tense::Futuro, Tense::PassatoRemoto]
        );
    }

    #[test]
    fn remediation_command_names_verb_and_tenses() {
        let mut report = MismatchReport::new();
        report.insert(Tense::Futuro, mismatch(6));
        report.insert(Tense::Presente, mismatch(4));
        let analysis = VerbAnalysis::new(VerbIdentity::new("andare"), report);
        assert_eq!(
            analysis.remediation_command().as_deref(),
            Some("verbo mark andare presente futuro")
        );
    }

    #[test]
    fn regular_verb_has_no_remediation() {
        let analysis = VerbAnalysis::new(VerbIdentity::new("parlare"), MismatchReport::new());
        assert!(!analysis.is_irregular());
        assert!(analysis.remediation_command().is_none());
    }

    #[test]
    fn report_serializes_as_tense_keyed_object() {
        let mut report = MismatchReport::new();
        report.insert(Tense::Presente, mismatch(2));
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["presente"]["mismatch_count"], 2);
    }
}
