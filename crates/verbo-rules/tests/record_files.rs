use std::fs;

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use verbo_core::Tense;
use verbo_rules::{ConjugationRecord, RulesError, analyze_record};

fn write(dir: &TempDir, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn regular_verb_file_has_empty_report() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "dormire.json",
        r#"{"word": "dormire", "conjugations": [
            {"group": "indicative/imperfect", "value": "dormivo"},
            {"group": "indicative/imperfect", "value": "dormivi"},
            {"group": "indicative/imperfect", "value": "dormiva"},
            {"group": "indicative/imperfect", "value": "dormivamo"},
            {"group": "indicative/imperfect", "value": "dormivate"},
            {"group": "indicative/imperfect", "value": "dormivano"}
        ]}"#,
    );
    let record = ConjugationRecord::from_path(&path).unwrap();
    let analysis = analyze_record(&record).unwrap();
    assert!(!analysis.is_irregular());
    assert_eq!(analysis.remediation_command(), None);
}

#[test]
fn irregular_passato_remoto_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "vedere.json",
        r#"{"word": "vedere", "conjugations": [
            {"group": "indicative/pasthistoric", "value": "vidi"},
            {"group": "indicative/pasthistoric", "value": "vedesti"},
            {"group": "indicative/pasthistoric", "value": "vide"},
            {"group": "indicative/pasthistoric", "value": "vedemmo"},
            {"group": "indicative/pasthistoric", "value": "vedeste"},
            {"group": "indicative/pasthistoric", "value": "videro"}
        ]}"#,
    );
    let analysis = analyze_record(&ConjugationRecord::from_path(&path).unwrap()).unwrap();
    assert_eq!(analysis.irregular_tenses(), vec![Tense::PassatoRemoto]);
    assert_eq!(
        analysis
            .report
            .get(Tense::PassatoRemoto)
            .unwrap()
            .mismatch_count,
        3
    );
}

#[test]
fn missing_file_reports_its_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.json");
    let err = ConjugationRecord::from_path(&path).unwrap_err();
    assert!(matches!(&err, RulesError::Io { path: p, .. } if *p == path));
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn blank_infinitive_is_rejected() {
    let record = ConjugationRecord::from_json_str(
        r#"{"word": "  ", "conjugations": [{"group": "indicative/present", "value": "x"}]}"#,
    )
    .unwrap();
    assert!(matches!(analyze_record(&record), Err(RulesError::Core(_))));
}
