use taiga_client::{MilestoneFilter, StorySearch};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{StoryCommands, StorySearchArgs};
use crate::context::AppContext;
use crate::output::output;

/// Handle `tbm story <subcommand>`.
pub async fn handle(
    action: &StoryCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let upstream = ctx.upstream()?;
    match action {
        StoryCommands::List { project_id } => {
            output(&upstream.list_user_stories(*project_id).await?, flags.format)
        }
        StoryCommands::Search(args) => {
            let search = search_params(args)?;
            output(&upstream.search_user_stories(&search).await?, flags.format)
        }
        StoryCommands::Get { id } => output(&upstream.get_user_story(*id).await?, flags.format),
    }
}

fn search_params(args: &StorySearchArgs) -> anyhow::Result<StorySearch> {
    let milestone = args
        .milestone
        .parse::<MilestoneFilter>()
        .map_err(anyhow::Error::msg)?;
    Ok(StorySearch {
        project_id: args.project,
        query: args.query.clone(),
        milestone,
        page: args.page,
        page_size: args.page_size,
    })
}
