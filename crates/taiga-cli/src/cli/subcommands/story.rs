use clap::{Args, Subcommand};

/// User story commands.
#[derive(Clone, Debug, Subcommand)]
pub enum StoryCommands {
    /// List every user story of a project.
    List { project_id: i64 },
    /// Search one page of user stories.
    Search(StorySearchArgs),
    /// Get a user story by ID.
    Get { id: i64 },
}

#[derive(Clone, Debug, Args)]
pub struct StorySearchArgs {
    pub project: i64,
    /// Free-text filter.
    #[arg(long)]
    pub query: Option<String>,
    /// Milestone ID, `null`/`backlog` for unplanned stories, or `any`.
    #[arg(long, default_value = "null")]
    pub milestone: String,
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    #[arg(long, default_value_t = 100)]
    pub page_size: u32,
}
