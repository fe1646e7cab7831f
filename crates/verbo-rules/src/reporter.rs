//! Observed conjugations vs. regular forms.

use verbo_core::{
    ConjugationTable, MismatchReport, PERSONS, Tense, TenseMismatch, VerbAnalysis, VerbIdentity,
};

use crate::generator::regular_forms;
use crate::normalize::normalize;

/// Number of the first six positions whose normalized forms differ.
///
/// Both slices must hold at least [`PERSONS`] entries; extra entries are
/// ignored.
#[must_use]
pub fn count_mismatches(actual: &[String], expected: &[String]) -> usize {
    actual
        .iter()
        .zip(expected)
        .take(PERSONS)
        .filter(|(a, e)| normalize(a) != normalize(e))
        .count()
}

/// Compare one tense; `None` when it cannot be assessed or is regular.
fn compare_tense(
    identity: &VerbIdentity,
    tense: Tense,
    actual: &[String],
) -> Option<TenseMismatch> {
    let expected = regular_forms(identity, tense);
    if actual.len() < PERSONS || expected.len() < PERSONS {
        tracing::debug!(
            verb = %identity.infinitive,
            %tense,
            observed = actual.len(),
            generated = expected.len(),
            "skipping tense: not enough forms to compare"
        );
        return None;
    }

    let mismatch_count = count_mismatches(actual, &expected);
    tracing::debug!(verb = %identity.infinitive, %tense, mismatch_count, "compared tense");
    (mismatch_count > 0).then(|| TenseMismatch {
        mismatch_count,
        actual_forms: actual.to_vec(),
        expected_forms: expected,
    })
}

/// Build the sparse mismatch report of a verb.
///
/// Only presente, imperfetto, futuro and passato remoto are looked at. A tense
/// is reported when it is present in `observed`, both sides have six forms,
/// and at least one position differs after normalization.
#[must_use]
pub fn compare(identity: &VerbIdentity, observed: &ConjugationTable) -> MismatchReport {
    let mut report = MismatchReport::new();
    for tense in Tense::ANALYZED {
        let Some(actual) = observed.get(tense) else {
            continue;
        };
        if let Some(mismatch) = compare_tense(identity, tense, actual) {
            report.insert(tense, mismatch);
        }
    }
    report
}

/// [`compare`], bundled with the identity it was computed for.
#[must_use]
pub fn analyze(identity: VerbIdentity, observed: &ConjugationTable) -> VerbAnalysis {
    let report = compare(&identity, observed);
    VerbAnalysis::new(identity, report)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::generator;

    fn strings(forms: &[&str]) -> Vec<String> {
        forms.iter().map(ToString::to_string).collect()
    }

    fn observed(tense: Tense, forms: &[&str]) -> ConjugationTable {
        [(tense, strings(forms))].into_iter().collect()
    }

    #[test]
    fn regular_presente_is_absent() {
        let identity = VerbIdentity::new("parlare");
        let table = observed(
            Tense::Presente,
            &["parlo", "parli", "parla", "parliamo", "parlate", "parlano"],
        );
        assert!(compare(&identity, &table).is_empty());
    }

    #[test]
    fn andare_presente_has_four_mismatches() {
        let identity = VerbIdentity::new("andare");
        let table = observed(
            Tense::Presente,
            &["vado", "vai", "va", "andiamo", "andate", "vanno"],
        );
        let report = compare(&identity, &table);
        let entry = report.get(Tense::Presente).expect("presente is irregular");
        assert_eq!(entry.mismatch_count, 4);
        assert_eq!(
            entry.expected_forms,
            strings(&["ando", "andi", "anda", "andiamo", "andate", "andano"])
        );
        assert_eq!(entry.actual_forms[0], "vado");
    }

    #[test]
    fn accents_and_case_do_not_count() {
        let identity = VerbIdentity::new("parlare");
        let table = observed(
            Tense::Futuro,
            &[
                "PARLERO",
                "parlerai",
                " parlera ",
                "parleremo",
                "parlerete",
                "parleranno",
            ],
        );
        assert!(compare(&identity, &table).is_empty());
    }

    #[rstest]
    fn counts_exactly_k_mismatches(#[values(1, 2, 3, 4, 5, 6)] k: usize) {
        let identity = VerbIdentity::new("amare");
        let mut forms = generator::imperfetto(&identity.root, identity.group);
        for form in forms.iter_mut().take(k) {
            form.push('x');
        }
        let table: ConjugationTable = [(Tense::Imperfetto, forms)].into_iter().collect();
        let report = compare(&identity, &table);
        assert_eq!(report.get(Tense::Imperfetto).unwrap().mismatch_count, k);
    }

    #[test]
    fn short_observed_tense_is_skipped() {
        let identity = VerbIdentity::new("andare");
        let table = observed(Tense::Presente, &["vado", "vai", "va"]);
        assert!(compare(&identity, &table).is_empty());
    }

    #[test]
    fn extra_observed_forms_are_ignored_but_kept() {
        let identity = VerbIdentity::new("parlare");
        let table = observed(
            Tense::Presente,
            &[
                "parlo", "parli", "parla", "parliamo", "parlate", "parlano", "bogus",
            ],
        );
        assert!(compare(&identity, &table).is_empty());

        let table = observed(
            Tense::Presente,
            &["parlo", "parli", "parla", "parliamo", "parlate", "xx", "bogus"],
        );
        let report = compare(&identity, &table);
        assert_eq!(report.get(Tense::Presente).unwrap().actual_forms.len(), 7);
    }

    #[test]
    fn other_group_skips_root_tenses_but_checks_futuro() {
        let identity = VerbIdentity::new("porre");
        let mut table = observed(
            Tense::Presente,
            &["pongo", "poni", "pone", "poniamo", "ponete", "pongono"],
        );
        table.insert(
            Tense::Futuro,
            strings(&["porrò", "porrai", "porrà", "porremo", "porrete", "porranno"]),
        );
        assert!(compare(&identity, &table).is_empty());

        table.insert(
            Tense::Futuro,
            strings(&["porrò", "porrai", "porrà", "porremo", "porrete", "porrano"]),
        );
        let report = compare(&identity, &table);
        assert!(!report.contains(Tense::Presente));
        assert_eq!(report.get(Tense::Futuro).unwrap().mismatch_count, 1);
    }

    #[test]
    fn compound_tenses_are_never_reported() {
        let identity = VerbIdentity::new("andare");
        let table = observed(
            Tense::PassatoProssimo,
            &[
                "sono andato",
                "sei andato",
                "è andato",
                "siamo andati",
                "siete andati",
                "sono andati",
            ],
        );
        assert!(compare(&identity, &table).is_empty());
    }

    #[test]
    fn analyze_keeps_identity() {
        let table = observed(
            Tense::Presente,
            &["vado", "vai", "va", "andiamo", "andate", "vanno"],
        );
        let analysis = analyze(VerbIdentity::new("andare"), &table);
        assert_eq!(analysis.root, "and");
        assert_eq!(analysis.irregular_tenses(), vec![Tense::Presente]);
    }
}
