use std::path::{Path, PathBuf};

use verbo_core::VerbAnalysis;
use verbo_core::responses::{AnalyzeResponse, SkippedInput};
use verbo_rules::{ConjugationRecord, analyze_record};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AnalyzeArgs;
use crate::context::AppContext;
use crate::output::{Table, output, preview};
use crate::progress::FileProgress;

/// Handle `verbo analyze`.
pub fn handle(args: &AnalyzeArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = run(&args.paths);
    let preview_forms = ctx.config.analysis.preview_forms;
    output(&response, flags.format, |response| {
        analysis_table(response, preview_forms)
    })
}

/// Analyze every record under `paths`. Unusable inputs are reported, not fatal.
pub fn run(paths: &[PathBuf]) -> AnalyzeResponse {
    let (files, mut skipped) = collect_inputs(paths);
    let progress = FileProgress::start(files.len());

    let mut verbs = Vec::new();
    for path in &files {
        progress.reading(path);
        match analyze_file(path) {
            Ok(analysis) => verbs.push(analysis),
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "skipping record");
                skipped.push(SkippedInput {
                    path: path.display().to_string(),
                    reason: error.to_string(),
                });
            }
        }
        progress.done_one();
    }
    progress.finish();

    let commands: Vec<String> = verbs
        .iter()
        .filter_map(VerbAnalysis::remediation_command)
        .collect();
    AnalyzeResponse {
        files_checked: files.len(),
        irregular_verbs: commands.len(),
        verbs,
        skipped,
        commands,
    }
}

fn analyze_file(path: &Path) -> Result<VerbAnalysis, verbo_rules::RulesError> {
    let record = ConjugationRecord::from_path(path)?;
    analyze_record(&record)
}

/// Expand directories into their `*.json` files, sorted. Missing paths are skipped.
fn collect_inputs(paths: &[PathBuf]) -> (Vec<PathBuf>, Vec<SkippedInput>) {
    let mut files = Vec::new();
    let mut skipped = Vec::new();
    for path in paths {
        if path.is_dir() {
            match json_files_in(path) {
                Ok(found) => files.extend(found),
                Err(error) => skipped.push(SkippedInput {
                    path: path.display().to_string(),
                    reason: error.to_string(),
                }),
            }
        } else if path.is_file() {
            files.push(path.clone());
        } else {
            skipped.push(SkippedInput {
                path: path.display().to_string(),
                reason: "no such file or directory".to_string(),
            });
        }
    }
    (files, skipped)
}

fn json_files_in(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn analysis_table(response: &AnalyzeResponse, preview_forms: usize) -> Table {
    let mut table = Table::new(&["verb", "group", "tense", "mismatches", "actual", "expected"]);
    for analysis in &response.verbs {
        if !analysis.is_irregular() {
            table.push_row(vec![
                analysis.infinitive.clone(),
                analysis.group.to_string(),
                "-".to_string(),
                "0".to_string(),
                "regular".to_string(),
                "-".to_string(),
            ]);
            continue;
        }
        for (tense, mismatch) in analysis.report.iter() {
            table.push_row(vec![
                analysis.infinitive.clone(),
                analysis.group.to_string(),
                tense.to_string(),
                mismatch.mismatch_count.to_string(),
                preview(&mismatch.actual_forms, preview_forms),
                preview(&mismatch.expected_forms, preview_forms),
            ]);
        }
    }

    table.push_footer(format!(
        "{} file(s) checked, {} verb(s) with irregular tenses, {} skipped",
        response.files_checked,
        response.irregular_verbs,
        response.skipped.len()
    ));
    for skipped in &response.skipped {
        table.push_footer(format!("skipped {}: {}", skipped.path, skipped.reason));
    }
    if !response.commands.is_empty() {
        table.push_footer("suggested commands:");
        table.footer.extend(response.commands.iter().map(|c| format!("  {c}")));
    }
    table
}
