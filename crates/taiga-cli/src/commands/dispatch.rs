use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command that needs an upstream session.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Project { action } => commands::project::handle(&action, ctx, flags).await,
        Commands::Story { action } => commands::story::handle(&action, ctx, flags).await,
        Commands::Epic { action } => commands::epic::handle(&action, ctx, flags).await,
        Commands::Task { action } => commands::task::handle(action, ctx, flags).await,
        Commands::Auth { .. } | Commands::Favorite { .. } => {
            unreachable!("auth/favorite are pre-dispatched in main")
        }
    }
}
