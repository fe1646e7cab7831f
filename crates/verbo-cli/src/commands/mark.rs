use verbo_core::Tense;
use verbo_core::entities::{MarkMode, MarkOutcome};
use verbo_core::responses::MarkResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::MarkArgs;
use crate::commands::shared::parse::parse_tenses;
use crate::context::AppContext;
use crate::output::{Table, output};

/// Handle `verbo mark`.
pub fn handle(args: &MarkArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let tenses = if args.all_tenses {
        Tense::ALL.to_vec()
    } else {
        parse_tenses(&args.tenses)?
    };
    let mode = if args.remove {
        MarkMode::Regular
    } else {
        MarkMode::Irregular
    };

    let mut catalog = ctx.catalog_file()?;
    let outcome = catalog.mark(&args.verb, &tenses, mode)?;
    let saved_to = if outcome.changed_any() {
        catalog.save(&ctx.catalog_path)?;
        Some(ctx.catalog_path.display().to_string())
    } else {
        tracing::debug!(verb = %outcome.infinitive, "nothing changed, database not rewritten");
        None
    };

    let response = MarkResponse { outcome, saved_to };
    output(&response, flags.format, |response| {
        mark_table(&response.outcome, response.saved_to.as_deref())
    })
}

fn mark_table(outcome: &MarkOutcome, saved_to: Option<&str>) -> Table {
    let state = match outcome.mode {
        MarkMode::Irregular => "irregular",
        MarkMode::Regular => "regular",
    };
    let mut table = Table::new(&["tense", "result"]);
    for change in &outcome.changes {
        let result = if change.changed {
            format!("marked {state}")
        } else {
            format!("already {state}")
        };
        table.push_row(vec![change.tense.to_string(), result]);
    }
    let now = if outcome.irregular_tenses.is_empty() {
        "none".to_string()
    } else {
        outcome
            .irregular_tenses
            .iter()
            .copied()
            .map(Tense::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    };
    table.push_footer(format!(
        "'{}' now has {} irregular tense(s): {now}",
        outcome.infinitive,
        outcome.irregular_tenses.len()
    ));
    table.push_footer(saved_to.map_or_else(
        || "nothing changed; database not rewritten".to_string(),
        |path| format!("saved to {path}"),
    ));
    table
}
