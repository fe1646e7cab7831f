use verbo_core::responses::GroupCountsResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::{Table, output};

/// Handle `verbo groups`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let catalog = ctx.catalog()?;
    let response = GroupCountsResponse {
        format: catalog.format(),
        counts: catalog.group_counts(),
    };
    output(&response, flags.format, |response| {
        let mut table = Table::new(&["group", "verbs"]);
        for (group, count) in &response.counts {
            table.push_row(vec![group.clone(), count.to_string()]);
        }
        table
    })
}
