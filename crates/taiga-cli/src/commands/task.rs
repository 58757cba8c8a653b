use taiga_client::NewTask;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TaskCommands;
use crate::context::AppContext;
use crate::output::{output, output_with_message};

mod bulk;
mod update;

/// Handle `tbm task <subcommand>`.
pub async fn handle(
    action: TaskCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let upstream = ctx.upstream()?;
    match action {
        TaskCommands::List { project_id, story } => {
            output(&upstream.list_tasks(project_id, story).await?, flags.format)
        }
        TaskCommands::Get { id } => output(&upstream.get_task(id).await?, flags.format),
        TaskCommands::Create {
            project_id,
            subject,
            description,
            status,
            assigned_to,
            story,
        } => {
            let task = NewTask {
                description: description.unwrap_or_default(),
                status,
                assigned_to,
                user_story: story,
                ..NewTask::new(project_id, subject)
            };
            output(&upstream.create_task(&task).await?, flags.format)
        }
        TaskCommands::Update {
            id,
            subject,
            description,
            status,
            assigned_to,
            unassign,
        } => {
            let params = update::Params {
                id,
                subject,
                description,
                status,
                assigned_to,
                unassign,
            };
            update::run(params, &upstream, flags).await
        }
        TaskCommands::Delete { id } => {
            upstream.delete_task(id).await?;
            output_with_message(&id, "Task deleted", flags.format)
        }
        TaskCommands::Bulk(args) => bulk::run(&args, &upstream, flags).await,
    }
}
