use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Analyze(args) => commands::analyze::handle(&args, ctx, flags),
        Commands::Mark(args) => commands::mark::handle(&args, ctx, flags),
        Commands::Info(args) => commands::info::handle(&args, ctx, flags),
        Commands::List(args) => commands::list::handle(&args, ctx, flags),
        Commands::Groups => commands::groups::handle(ctx, flags),
        Commands::Migrate(args) => commands::migrate::handle(&args, ctx, flags),
        Commands::Import(args) => commands::import::handle(&args, ctx, flags),
        Commands::Conjugate(args) => commands::conjugate::handle(&args, ctx, flags),
        Commands::Quiz(args) => commands::quiz::handle(&args, ctx, flags),
        Commands::Check(args) => commands::check::handle(&args, flags),
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
