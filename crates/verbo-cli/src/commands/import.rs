use std::collections::BTreeMap;

use verbo_catalog::{CatalogData, VerbCatalog, import_raw};
use verbo_core::responses::ImportResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ImportArgs;
use crate::context::AppContext;
use crate::output::{Table, output};

/// Handle `verbo import`.
pub fn handle(args: &ImportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let dir = args
        .dir
        .clone()
        .unwrap_or_else(|| ctx.config.catalog.raw_dir());
    let out = args.out.as_ref().unwrap_or(&ctx.catalog_path);

    let report = import_raw(&dir)?;
    let counts: BTreeMap<String, usize> = report
        .catalog
        .groups()
        .map(|(key, verbs)| (key.to_string(), verbs.len()))
        .collect();
    let total_verbs = report.total_verbs();
    VerbCatalog::new(CatalogData::Legacy(report.catalog)).save(out)?;

    let response = ImportResponse {
        files_processed: report.files_processed,
        total_verbs,
        counts,
        output: out.display().to_string(),
    };
    output(&response, flags.format, |response| {
        let mut table = Table::new(&["group", "verbs"]);
        for (group, count) in &response.counts {
            table.push_row(vec![group.clone(), count.to_string()]);
        }
        table.push_footer(format!(
            "{} verbs from {} file(s) written to {}",
            response.total_verbs, response.files_processed, response.output
        ));
        table
    })
}
