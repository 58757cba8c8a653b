use taiga_client::ProjectRef;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProjectCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `tbm project <subcommand>`.
pub async fn handle(
    action: &ProjectCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let upstream = ctx.upstream()?;
    match action {
        ProjectCommands::List => output(&upstream.list_projects().await?, flags.format),
        ProjectCommands::Get { project } => {
            let Ok(project) = project.parse::<ProjectRef>();
            output(&upstream.get_project(&project).await?, flags.format)
        }
        ProjectCommands::Statuses { project_id } => {
            output(&upstream.get_task_statuses(*project_id).await?, flags.format)
        }
        ProjectCommands::Members { project_id, slug } => output(
            &upstream
                .get_project_members(*project_id, slug.as_deref())
                .await?,
            flags.format,
        ),
    }
}
