use verbo_core::responses::MigrateResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::MigrateArgs;
use crate::context::{AppContext, load_catalog_file};
use crate::output::{Table, output};

/// Handle `verbo migrate`.
pub fn handle(args: &MigrateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let from = args.from.as_deref().unwrap_or(&ctx.catalog_path);
    let legacy = load_catalog_file(from)?;
    let migrated = legacy.migrated()?;
    migrated.save(&args.to)?;

    let response = MigrateResponse {
        total_verbs: migrated.len(),
        output: args.to.display().to_string(),
    };
    output(&response, flags.format, |response| {
        let mut table = Table::key_value([
            ("total verbs", response.total_verbs.to_string()),
            ("output", response.output.clone()),
        ]);
        table.push_footer(format!(
            "Back up {} and replace it with {} to start using per-tense irregularity.",
            from.display(),
            response.output
        ));
        table
    })
}
