use clap::Subcommand;

/// Epic commands.
#[derive(Clone, Debug, Subcommand)]
pub enum EpicCommands {
    /// List every epic of a project.
    List { project_id: i64 },
    /// Get an epic by ID.
    Get { id: i64 },
}
