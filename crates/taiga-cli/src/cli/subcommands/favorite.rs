use clap::Subcommand;

/// Local favorites.
#[derive(Clone, Debug, Subcommand)]
pub enum FavoriteCommands {
    /// Favorite projects.
    Project {
        #[command(subcommand)]
        action: FavoriteProjectCommands,
    },
    /// Favorite user stories.
    Story {
        #[command(subcommand)]
        action: FavoriteStoryCommands,
    },
}

#[derive(Clone, Debug, Subcommand)]
pub enum FavoriteProjectCommands {
    Add {
        project_id: i64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        slug: String,
    },
    List,
    Remove { project_id: i64 },
}

#[derive(Clone, Debug, Subcommand)]
pub enum FavoriteStoryCommands {
    Add {
        user_story_id: i64,
        #[arg(long = "ref")]
        reference: i64,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        project: i64,
    },
    List {
        /// Only stories of this project.
        #[arg(long)]
        project: Option<i64>,
    },
    Remove { user_story_id: i64 },
}
