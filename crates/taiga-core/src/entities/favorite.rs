use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A project bookmarked locally, keyed by its upstream ID.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FavoriteProject {
    pub id: i64,
    pub project_id: i64,
    pub project_name: String,
    pub project_slug: String,
    pub created_at: DateTime<Utc>,
}

/// A user story bookmarked locally, keyed by its upstream ID.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FavoriteUserStory {
    pub id: i64,
    pub user_story_id: i64,
    pub user_story_ref: i64,
    pub user_story_subject: String,
    pub project_id: i64,
    pub created_at: DateTime<Utc>,
}
