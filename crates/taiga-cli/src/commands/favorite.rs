use anyhow::Context;
use taiga_config::TaigaConfig;
use taiga_favorites::{FavoritesStore, NewFavoriteProject, NewFavoriteUserStory};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{FavoriteCommands, FavoriteProjectCommands, FavoriteStoryCommands};
use crate::output::{output, output_with_message};

/// Handle `tbm favorite <subcommand>`. Works without credentials.
pub async fn handle(
    action: &FavoriteCommands,
    flags: &GlobalFlags,
    config: &TaigaConfig,
) -> anyhow::Result<()> {
    let store = open_store(config).await?;
    match action {
        FavoriteCommands::Project { action } => handle_project(action, &store, flags).await,
        FavoriteCommands::Story { action } => handle_story(action, &store, flags).await,
    }
}

async fn open_store(config: &TaigaConfig) -> anyhow::Result<FavoritesStore> {
    let path = config.favorites.resolved_path();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let path = path.to_string_lossy();
    FavoritesStore::open_local(&path)
        .await
        .with_context(|| format!("failed to open favorites store at {path}"))
}

async fn handle_project(
    action: &FavoriteProjectCommands,
    store: &FavoritesStore,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        FavoriteProjectCommands::Add {
            project_id,
            name,
            slug,
        } => {
            let favorite = store
                .add_project(&NewFavoriteProject {
                    project_id: *project_id,
                    project_name: name.clone(),
                    project_slug: slug.clone(),
                })
                .await?;
            output_with_message(&favorite, "Project added to favorites", flags.format)
        }
        FavoriteProjectCommands::List => output(&store.list_projects().await?, flags.format),
        FavoriteProjectCommands::Remove { project_id } => {
            store.remove_project(*project_id).await?;
            output_with_message(project_id, "Project removed from favorites", flags.format)
        }
    }
}

async fn handle_story(
    action: &FavoriteStoryCommands,
    store: &FavoritesStore,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        FavoriteStoryCommands::Add {
            user_story_id,
            reference,
            subject,
            project,
        } => {
            let favorite = store
                .add_user_story(&NewFavoriteUserStory {
                    user_story_id: *user_story_id,
                    user_story_ref: *reference,
                    user_story_subject: subject.clone(),
                    project_id: *project,
                })
                .await?;
            output_with_message(&favorite, "User story added to favorites", flags.format)
        }
        FavoriteStoryCommands::List { project } => {
            output(&store.list_user_stories(*project).await?, flags.format)
        }
        FavoriteStoryCommands::Remove { user_story_id } => {
            store.remove_user_story(*user_story_id).await?;
            output_with_message(user_story_id, "User story removed from favorites", flags.format)
        }
    }
}
