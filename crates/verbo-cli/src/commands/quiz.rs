use verbo_catalog::QuizOptions;
use verbo_core::responses::QuizResponse;
use verbo_rules::check::person_labels;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::QuizArgs;
use crate::commands::shared::parse::parse_language;
use crate::context::AppContext;
use crate::output::{Table, output};

/// Handle `verbo quiz`.
pub fn handle(args: &QuizArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let language = match &args.language {
        Some(raw) => parse_language(raw)?,
        None => ctx.config.general.language()?,
    };
    let options = QuizOptions::parse(&args.groups, &args.tenses)?;
    let catalog = ctx.catalog()?;
    let question = catalog.quiz(&mut rand::thread_rng(), &options, person_labels(language))?;
    output(&question, flags.format, quiz_table)
}

fn quiz_table(question: &QuizResponse) -> Table {
    Table::key_value([
        ("verb", question.verb.clone()),
        ("person", question.person.clone()),
        ("tense", question.tense.to_string()),
        ("group", question.group.clone()),
        ("irregular", if question.is_irregular { "yes" } else { "no" }.to_string()),
    ])
}
