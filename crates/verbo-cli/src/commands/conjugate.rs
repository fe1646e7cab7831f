use verbo_core::responses::ConjugateResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ConjugateArgs;
use crate::commands::shared::parse::{parse_language, parse_tense};
use crate::context::AppContext;
use crate::output::{Table, output};

/// Handle `verbo conjugate`.
pub fn handle(args: &ConjugateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let language = match &args.language {
        Some(raw) => parse_language(raw)?,
        None => ctx.config.general.language()?,
    };
    let tense = args.tense.as_deref().map(parse_tense).transpose()?;
    let response = verbo_rules::conjugate(language, &args.verb, tense)?;
    output(&response, flags.format, conjugation_table)
}

fn conjugation_table(response: &ConjugateResponse) -> Table {
    let mut table = Table::new(&["tense", "person", "form"]);
    for tense in &response.tenses {
        for form in &tense.forms {
            table.push_row(vec![
                tense.tense.to_string(),
                form.person.clone(),
                form.form.clone(),
            ]);
        }
    }
    table
}
