use verbo_catalog::GroupFilter;
use verbo_core::responses::VerbListResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ListArgs;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_tense;
use crate::context::AppContext;
use crate::output::{Table, output};

/// Handle `verbo list`.
pub fn handle(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let filter = args
        .group
        .as_deref()
        .map(str::parse::<GroupFilter>)
        .transpose()?;
    let tense = args.tense.as_deref().map(parse_tense).transpose()?;
    let limit = effective_limit(flags.limit, ctx.default_limit());

    let catalog = ctx.catalog()?;
    let matched = match filter {
        Some(filter) => catalog.select(filter, tense),
        None => catalog.all_verbs(),
    };
    let total = matched.len();
    let verbs = matched
        .into_iter()
        .take(limit)
        .map(ToString::to_string)
        .collect();

    let response = VerbListResponse {
        group: filter.map_or_else(|| "ALL".to_string(), |f| f.to_string()),
        tense,
        verbs,
        total,
    };
    output(&response, flags.format, list_table)
}

fn list_table(response: &VerbListResponse) -> Table {
    let mut table = Table::new(&["verb"]);
    for verb in &response.verbs {
        table.push_row(vec![verb.clone()]);
    }
    if response.verbs.len() < response.total {
        table.push_footer(format!(
            "showing {} of {} verbs",
            response.verbs.len(),
            response.total
        ));
    }
    table
}
