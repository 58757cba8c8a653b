use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::StatusDisplay;

/// Display information for a task's assignee.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AssigneeDisplay {
    pub full_name_display: Option<String>,
}

/// A unit of work, optionally linked to a user story.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Task {
    pub id: i64,
    /// Assigned upstream at creation; never sent back on update.
    #[serde(rename = "ref")]
    pub reference: i64,
    pub subject: String,
    pub description: String,
    pub status: Option<i64>,
    pub status_extra_info: StatusDisplay,
    pub assigned_to: Option<i64>,
    pub assigned_to_extra_info: AssigneeDisplay,
    pub user_story: Option<i64>,
    pub project: Option<i64>,
    pub created_date: Option<DateTime<Utc>>,
    pub modified_date: Option<DateTime<Utc>>,
}

/// A status a task can take within a project.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaskStatus {
    pub id: i64,
    pub name: String,
    pub color: Option<String>,
}

/// A task the caller wants to exist, before creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaskDraft {
    pub subject: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<i64>,
}

impl TaskDraft {
    #[must_use]
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Result of one creation attempt inside a bulk run.
///
/// Serialized untagged: a success is the task record itself, a failure is
/// `{"error": "...", "data": {...original draft...}}`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(untagged)]
pub enum TaskCreationOutcome {
    Created(Box<Task>),
    Failed { error: String, data: TaskDraft },
}

impl TaskCreationOutcome {
    #[must_use]
    pub const fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }

    #[must_use]
    pub fn task(&self) -> Option<&Task> {
        match self {
            Self::Created(task) => Some(task),
            Self::Failed { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_omits_unset_fields() {
        let draft = TaskDraft::new("Write docs");
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json, serde_json::json!({ "subject": "Write docs" }));
    }

    #[test]
    fn failed_outcome_has_error_and_data_shape() {
        let outcome = TaskCreationOutcome::Failed {
            error: "Failed to create task: 500 - boom".into(),
            data: TaskDraft::new("C").with_description("third"),
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["error"], "Failed to create task: 500 - boom");
        assert_eq!(json["data"]["subject"], "C");
        assert_eq!(json["data"]["description"], "third");
        assert!(!outcome.is_created());
        assert!(outcome.task().is_none());
    }

    #[test]
    fn untagged_outcome_reads_back_failure() {
        let json = r#"{"error":"nope","data":{"subject":"X"}}"#;
        let outcome: TaskCreationOutcome = serde_json::from_str(json).unwrap();
        assert!(matches!(outcome, TaskCreationOutcome::Failed { ref data, .. } if data.subject == "X"));
    }
}
