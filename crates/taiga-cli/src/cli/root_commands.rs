use clap::Subcommand;

use crate::cli::subcommands::{
    AuthCommands, EpicCommands, FavoriteCommands, ProjectCommands, StoryCommands, TaskCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Log in and inspect the current identity.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Projects, task statuses and members.
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },
    /// User stories.
    Story {
        #[command(subcommand)]
        action: StoryCommands,
    },
    /// Epics.
    Epic {
        #[command(subcommand)]
        action: EpicCommands,
    },
    /// Tasks, including bulk creation.
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// Local favorites (no login needed).
    Favorite {
        #[command(subcommand)]
        action: FavoriteCommands,
    },
}
