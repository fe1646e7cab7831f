use crate::cli::GlobalFlags;
use crate::cli::root_commands::CheckArgs;
use crate::commands::shared::parse::parse_tense;
use crate::output::{Table, output};

/// Handle `verbo check`.
pub fn handle(args: &CheckArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let tense = parse_tense(&args.tense)?;
    let response = verbo_rules::check::check_german(&args.verb, &args.person, tense, &args.answer)?;
    output(&response, flags.format, |response| {
        Table::key_value([
            ("correct", response.correct.to_string()),
            ("correct answer", response.correct_answer.clone()),
            ("your answer", response.your_answer.clone()),
        ])
    })
}
