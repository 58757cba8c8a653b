use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A project membership entry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Member {
    /// Membership ID.
    pub id: i64,
    /// User ID of the member.
    pub user: Option<i64>,
    pub full_name_display: String,
    /// Falls back to `full_name_display` when the upstream omits it.
    pub full_name: String,
    pub role_name: String,
    pub role: Option<i64>,
    pub is_active: bool,
    /// Avatar URL.
    pub photo: Option<String>,
    pub username: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub total_story_points: f64,
    pub members: Vec<Member>,
}
