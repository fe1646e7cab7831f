//! `verbo schema`: print the JSON Schema of a command's JSON output.

use anyhow::bail;
use schemars::schema_for;
use verbo_core::responses::{
    AnalyzeResponse, CheckResponse, ConjugateResponse, GroupCountsResponse, ImportResponse,
    MarkResponse, MigrateResponse, QuizResponse, VerbInfoResponse, VerbListResponse,
};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;

/// Command names accepted by `verbo schema`.
pub const SCHEMA_NAMES: [&str; 10] = [
    "analyze",
    "check",
    "conjugate",
    "groups",
    "import",
    "info",
    "list",
    "mark",
    "migrate",
    "quiz",
];

/// Schema for a command or response type name, `None` when the name is unknown.
pub fn schema_value(name: &str) -> Option<serde_json::Value> {
    let name = name.trim().to_ascii_lowercase();
    let name = name.strip_suffix("response").unwrap_or(&name);
    let schema = match name {
        "analyze" => schema_for!(AnalyzeResponse),
        "check" => schema_for!(CheckResponse),
        "conjugate" => schema_for!(ConjugateResponse),
        "groups" | "groupcounts" => schema_for!(GroupCountsResponse),
        "import" => schema_for!(ImportResponse),
        "info" | "verbinfo" => schema_for!(VerbInfoResponse),
        "list" | "verblist" => schema_for!(VerbListResponse),
        "mark" => schema_for!(MarkResponse),
        "migrate" => schema_for!(MigrateResponse),
        "quiz" => schema_for!(QuizResponse),
        _ => return None,
    };
    serde_json::to_value(schema).ok()
}

/// Handle `verbo schema`. Always prints JSON regardless of `--format`.
pub fn handle(args: &SchemaArgs, _flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(schema) = schema_value(&args.type_name) else {
        bail!(
            "unknown schema '{}'; available: {}",
            args.type_name,
            SCHEMA_NAMES.join(", ")
        );
    };
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
