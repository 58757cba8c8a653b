mod auth;
mod epic;
mod favorite;
mod project;
mod story;
mod task;

pub use auth::{AuthCommands, AuthLoginArgs};
pub use epic::EpicCommands;
pub use favorite::{FavoriteCommands, FavoriteProjectCommands, FavoriteStoryCommands};
pub use project::ProjectCommands;
pub use story::{StoryCommands, StorySearchArgs};
pub use task::{TaskBulkArgs, TaskCommands};
