//! Build a legacy catalog from a directory of raw verb lists.
//!
//! Each `*.json` file may be a list of strings, a list of `{"verb": ...}`
//! objects, or an object whose values are string lists. Other values inside a
//! file are ignored. Files that cannot be read or parsed are skipped.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::catalog::legacy_key_for;
use crate::error::CatalogError;
use crate::model::{IRREGULAR_KEY, LegacyCatalog, REGULAR_KEYS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReport {
    pub files_processed: usize,
    pub skipped: Vec<PathBuf>,
    pub catalog: LegacyCatalog,
}

impl ImportReport {
    #[must_use]
    pub fn total_verbs(&self) -> usize {
        self.catalog.groups().map(|(_, verbs)| verbs.len()).sum()
    }
}

fn collect_verbs(value: &Value, into: &mut BTreeSet<String>) {
    let mut add = |raw: &str| {
        let verb = raw.trim().to_lowercase();
        if !verb.is_empty() {
            into.insert(verb);
        }
    };
    match value {
        Value::Array(items) => {
            for item in items {
                match item {
                    Value::String(verb) => add(verb.as_str()),
                    Value::Object(object) => {
                        if let Some(verb) = object.get("verb").and_then(Value::as_str) {
                            add(verb);
                        }
                    }
                    _ => {}
                }
            }
        }
        Value::Object(object) => {
            for list in object.values().filter_map(Value::as_array) {
                for verb in list.iter().filter_map(Value::as_str) {
                    add(verb);
                }
            }
        }
        _ => {}
    }
}

fn json_files(dir: &Path) -> Result<Vec<PathBuf>, CatalogError> {
    let entries = std::fs::read_dir(dir).map_err(|e| CatalogError::io(dir, e))?;
    let mut files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    Ok(files)
}

fn read_file(path: &Path) -> Result<Value, CatalogError> {
    let text = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
    Ok(serde_json::from_str(&text)?)
}

/// Collect, classify and sort every verb found under `dir`.
///
/// The four legacy keys are always present, possibly empty.
///
/// # Errors
///
/// [`CatalogError::MissingDirectory`] when `dir` does not exist,
/// [`CatalogError::NoRawFiles`] when it holds no `*.json` file.
pub fn import_raw(dir: &Path) -> Result<ImportReport, CatalogError> {
    if !dir.is_dir() {
        return Err(CatalogError::MissingDirectory(dir.to_path_buf()));
    }
    let files = json_files(dir)?;
    if files.is_empty() {
        return Err(CatalogError::NoRawFiles(dir.to_path_buf()));
    }

    let mut verbs = BTreeSet::new();
    let mut files_processed = 0;
    let mut skipped = Vec::new();
    for path in files {
        match read_file(&path) {
            Ok(value) => {
                collect_verbs(&value, &mut verbs);
                files_processed += 1;
                tracing::debug!(path = %path.display(), "processed raw verb file");
            }
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "skipping raw verb file");
                skipped.push(path);
            }
        }
    }

    let mut catalog = LegacyCatalog::new();
    let keys = REGULAR_KEYS.into_iter().chain([IRREGULAR_KEY]);
    for key in keys {
        let group: Vec<String> = verbs
            .iter()
            .filter(|verb| legacy_key_for(verb) == key)
            .cloned()
            .collect();
        catalog.set_group(key, group);
    }

    tracing::info!(
        files = files_processed,
        verbs = verbs.len(),
        "imported raw verb lists"
    );
    Ok(ImportReport {
        files_processed,
        skipped,
        catalog,
    })
}
