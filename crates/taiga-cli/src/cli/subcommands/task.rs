use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Task commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TaskCommands {
    /// List tasks of a project.
    List {
        project_id: i64,
        /// Only tasks of this user story.
        #[arg(long)]
        story: Option<i64>,
    },
    /// Get a task by ID.
    Get { id: i64 },
    /// Create one task.
    Create {
        project_id: i64,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        description: Option<String>,
        /// Status ID (defaults to the project's first task status).
        #[arg(long)]
        status: Option<i64>,
        #[arg(long)]
        assigned_to: Option<i64>,
        #[arg(long)]
        story: Option<i64>,
    },
    /// Update selected fields of a task.
    Update {
        id: i64,
        #[arg(long)]
        subject: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        status: Option<i64>,
        #[arg(long, conflicts_with = "unassign")]
        assigned_to: Option<i64>,
        /// Remove the current assignee.
        #[arg(long)]
        unassign: bool,
    },
    /// Delete a task.
    Delete { id: i64 },
    /// Create many tasks, skipping subjects already under the user story.
    Bulk(TaskBulkArgs),
}

#[derive(Clone, Debug, Args)]
pub struct TaskBulkArgs {
    pub project: i64,
    /// Target user story; enables the duplicate check.
    #[arg(long)]
    pub story: Option<i64>,
    /// Status for tasks that carry none.
    #[arg(long)]
    pub status: Option<i64>,
    /// Assignee for tasks that carry none.
    #[arg(long)]
    pub assigned_to: Option<i64>,
    /// JSON file with an array of `{subject, description?, status?, assigned_to?}`.
    #[arg(long, conflicts_with = "subjects", required_unless_present = "subjects")]
    pub file: Option<PathBuf>,
    /// Task subject; repeat for several tasks.
    #[arg(long = "subject", value_name = "SUBJECT")]
    pub subjects: Vec<String>,
}
