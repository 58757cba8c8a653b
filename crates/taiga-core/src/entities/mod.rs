//! Canonical entity records.
//!
//! Every upstream payload, whatever shape it arrives in, is translated into
//! one of these structs by the client's wire layer. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON output and schema
//! validation.

mod favorite;
mod project;
mod story;
mod task;

pub use favorite::{FavoriteProject, FavoriteUserStory};
pub use project::{Member, Project};
pub use story::{Epic, StatusDisplay, UserStory};
pub use task::{AssigneeDisplay, Task, TaskCreationOutcome, TaskDraft, TaskStatus};
