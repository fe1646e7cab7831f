use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Compare conjugation records against the regular patterns.
    Analyze(AnalyzeArgs),
    /// Mark tenses of a verb as irregular (or regular again).
    Mark(MarkArgs),
    /// Show what the verb database knows about a verb.
    Info(InfoArgs),
    /// List verbs by group and tense irregularity.
    List(ListArgs),
    /// Verb counts per group.
    Groups,
    /// Convert a legacy verb database to per-tense irregularity.
    Migrate(MigrateArgs),
    /// Build a legacy verb database from raw verb lists.
    Import(ImportArgs),
    /// Conjugate a verb from the rule tables.
    Conjugate(ConjugateArgs),
    /// Draw a random quiz question from the verb database.
    Quiz(QuizArgs),
    /// Check a German quiz answer.
    Check(CheckArgs),
    /// Print the JSON schema of a response type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct AnalyzeArgs {
    /// Record files, or directories of `*.json` records.
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct MarkArgs {
    /// Verb infinitive as stored in the database.
    pub verb: String,
    /// Tenses to mark (presente, imperfetto, futuro, passato_remoto, ...).
    #[arg(required_unless_present = "all_tenses")]
    pub tenses: Vec<String>,
    /// Mark every tense.
    #[arg(long, conflicts_with = "tenses")]
    pub all_tenses: bool,
    /// Mark the tenses regular instead.
    #[arg(long)]
    pub remove: bool,
}

#[derive(Clone, Debug, Args)]
pub struct InfoArgs {
    pub verb: String,
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// ARE, ERE, IRE, OTHER, REGULAR, IRREGULAR (or ONREGELMATIG). All verbs when omitted.
    #[arg(long)]
    pub group: Option<String>,
    /// Narrow REGULAR/IRREGULAR to one tense.
    #[arg(long)]
    pub tense: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct MigrateArgs {
    /// Legacy database (defaults to the configured catalog path).
    #[arg(long)]
    pub from: Option<PathBuf>,
    /// Output file for the migrated database.
    #[arg(long)]
    pub to: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct ImportArgs {
    /// Directory of raw verb lists (defaults to `catalog.raw_dir`).
    #[arg(long)]
    pub dir: Option<PathBuf>,
    /// Output file (defaults to the configured catalog path).
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct ConjugateArgs {
    pub verb: String,
    /// Single tense; every supported tense when omitted.
    #[arg(long)]
    pub tense: Option<String>,
    /// it, de (defaults to `general.default_language`).
    #[arg(long)]
    pub language: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct QuizArgs {
    /// Comma-separated groups: ARE, ERE, IRE, OTHER, REGULAR, IRREGULAR, ONREGELMATIG.
    #[arg(long, default_value = "ARE,ONREGELMATIG")]
    pub groups: String,
    /// Comma-separated tenses to draw from.
    #[arg(long, default_value = "presente")]
    pub tenses: String,
    /// Language whose person labels are used (defaults to `general.default_language`).
    #[arg(long)]
    pub language: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct CheckArgs {
    pub verb: String,
    /// ich, du, er/sie/es, wir, ihr, sie/Sie.
    #[arg(long)]
    pub person: String,
    /// presente, imperfetto, passato_prossimo, futuro.
    #[arg(long)]
    pub tense: String,
    /// The answer to check; the pronoun may be included.
    #[arg(long, allow_hyphen_values = true)]
    pub answer: String,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Response type name, e.g. `analyze` or `AnalyzeResponse`.
    pub type_name: String,
}
