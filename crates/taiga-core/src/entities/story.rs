use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Display information attached to a status reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatusDisplay {
    pub name: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UserStory {
    pub id: i64,
    /// Human-facing sequential number within the project.
    #[serde(rename = "ref")]
    pub reference: i64,
    pub subject: String,
    pub description: String,
    pub status: Option<i64>,
    pub status_extra_info: StatusDisplay,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Epic {
    pub id: i64,
    #[serde(rename = "ref")]
    pub reference: i64,
    pub subject: String,
    pub description: String,
    pub status: Option<i64>,
    pub status_extra_info: StatusDisplay,
}
