use clap::Subcommand;

/// Project commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProjectCommands {
    /// List projects you are a member of.
    List,
    /// Get a project by ID or slug.
    Get { project: String },
    /// Task statuses of a project.
    Statuses { project_id: i64 },
    /// Members of a project.
    Members {
        project_id: i64,
        /// Look the project up by slug (often returns the complete member list).
        #[arg(long)]
        slug: Option<String>,
    },
}
