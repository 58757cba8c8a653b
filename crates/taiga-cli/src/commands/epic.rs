use crate::cli::GlobalFlags;
use crate::cli::subcommands::EpicCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `tbm epic <subcommand>`.
pub async fn handle(
    action: &EpicCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let upstream = ctx.upstream()?;
    match action {
        EpicCommands::List { project_id } => {
            output(&upstream.list_epics(*project_id).await?, flags.format)
        }
        EpicCommands::Get { id } => output(&upstream.get_epic(*id).await?, flags.format),
    }
}
