use verbo_core::Tense;
use verbo_core::entities::{CatalogFormat, VerbInfo};
use verbo_core::responses::VerbInfoResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::InfoArgs;
use crate::context::AppContext;
use crate::output::{Table, output};

/// Handle `verbo info`.
pub fn handle(args: &InfoArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let catalog = ctx.catalog()?;
    let verb = catalog.info(args.verb.trim())?;
    output(&VerbInfoResponse { verb }, flags.format, |response| {
        info_table(&response.verb)
    })
}

fn info_table(info: &VerbInfo) -> Table {
    let format = match info.format {
        CatalogFormat::Legacy => "legacy",
        CatalogFormat::Current => "current",
    };
    let mut pairs = vec![
        ("verb", info.infinitive.clone()),
        ("group", info.group.clone().unwrap_or_else(|| "-".to_string())),
    ];
    if let Some(tenses) = &info.irregular_tenses {
        let listed = if tenses.is_empty() {
            "none".to_string()
        } else {
            tenses.iter().copied().map(Tense::as_str).collect::<Vec<_>>().join(", ")
        };
        pairs.push(("irregular tenses", listed));
    }
    if let Some(irregular) = info.irregular {
        pairs.push(("irregular", if irregular { "yes" } else { "no" }.to_string()));
    }
    pairs.push(("format", format.to_string()));
    Table::key_value(pairs)
}
