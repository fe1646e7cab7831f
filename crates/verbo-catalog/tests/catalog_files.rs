use std::fs;

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use verbo_catalog::{CatalogError, GroupFilter, VerbCatalog, import_raw};
use verbo_core::entities::{CatalogFormat, MarkMode};
use verbo_core::Tense;

const CURRENT: &str = r#"{
  "verbs": [
    {"infinitive": "andare", "group": "ARE", "irregular_tenses": ["futuro"]},
    {"infinitive": "perché", "group": "OTHER", "irregular_tenses": []}
  ]
}"#;

#[test]
fn mark_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("verbs.json");
    fs::write(&path, CURRENT).unwrap();

    let mut catalog = VerbCatalog::load(&path).unwrap();
    assert_eq!(catalog.source(), Some(path.as_path()));
    catalog
        .mark("andare", &[Tense::Presente], MarkMode::Irregular)
        .unwrap();
    catalog.save(&path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("perché"), "non-ASCII must be written as is");
    assert!(text.contains("\"presente\""));

    let mut other = VerbCatalog::load(&path).unwrap();
    assert!(other.is_irregular_for("andare", Tense::Presente));

    fs::write(&path, r#"{"verbs": []}"#).unwrap();
    other.reload().unwrap();
    assert!(other.is_empty());
}

#[test]
fn missing_file_falls_back_to_defaults_and_reloads_later() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("verbs.json");

    let mut catalog = VerbCatalog::load_or_default(&path).unwrap();
    assert_eq!(catalog.format(), CatalogFormat::Legacy);
    assert_eq!(catalog.len(), 36);

    fs::write(&path, CURRENT).unwrap();
    catalog.reload().unwrap();
    assert_eq!(catalog.format(), CatalogFormat::Current);
    assert_eq!(catalog.all_verbs(), vec!["andare", "perché"]);
}

#[test]
fn strict_load_reports_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.json");
    assert!(matches!(
        VerbCatalog::load(&path),
        Err(CatalogError::Io { .. })
    ));
}

#[test]
fn invalid_json_is_an_error_even_with_fallback() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("verbs.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        VerbCatalog::load_or_default(&path),
        Err(CatalogError::Json(_))
    ));
}

#[test]
fn migrate_then_save_round_trips() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("nested").join("verbs_new.json");
    let migrated = VerbCatalog::defaults().migrated().unwrap();
    migrated.save(&out).unwrap();

    let loaded = VerbCatalog::load(&out).unwrap();
    assert_eq!(loaded.format(), CatalogFormat::Current);
    assert_eq!(loaded.all_verbs().first(), Some(&"amare"));
    assert_eq!(
        loaded.select(GroupFilter::Irregular, Some(Tense::FuturoAnteriore)).len(),
        12
    );
}

#[test]
fn import_raw_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.json"), r#"["parlare", "essere", "porre"]"#).unwrap();
    fs::write(
        dir.path().join("b.json"),
        r#"{"x": ["credere", "parlare"], "y": ["dormire"]}"#,
    )
    .unwrap();
    fs::write(dir.path().join("broken.json"), "[").unwrap();
    fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let report = import_raw(dir.path()).unwrap();
    assert_eq!(report.files_processed, 2);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.total_verbs(), 5);
    assert_eq!(report.catalog.group("ARE"), ["parlare"]);
    assert_eq!(report.catalog.group("ONREGELMATIG"), ["essere", "porre"]);
    assert!(report.catalog.group("IRE").contains(&"dormire".to_string()));
}

#[test]
fn import_raw_requires_json_files() {
    let dir = TempDir::new().unwrap();
    assert!(matches!(
        import_raw(dir.path()),
        Err(CatalogError::NoRawFiles(_))
    ));
    assert!(matches!(
        import_raw(&dir.path().join("missing")),
        Err(CatalogError::MissingDirectory(_))
    ));
}
