//! Response types returned as JSON by the operation surface.
//!
//! Every answer is wrapped in [`ApiEnvelope`]: `{"success": true, "data": ...}`
//! on success, `{"success": false, "detail": "..."}` on failure.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{TaskCreationOutcome, TaskDraft};
use crate::errors::ErrorKind;

/// `{success, data | detail}` wrapper around every response.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl<T> ApiEnvelope<T> {
    #[must_use]
    pub const fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            detail: None,
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn error(detail: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            data: None,
            detail: Some(detail.into()),
        }
    }
}

/// Envelope plus the status code the routing layer should answer with.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusEnvelope<T> {
    pub status: u16,
    pub body: ApiEnvelope<T>,
}

impl<T> StatusEnvelope<T> {
    #[must_use]
    pub const fn ok(data: T) -> Self {
        Self {
            status: 200,
            body: ApiEnvelope::ok(data),
        }
    }

    #[must_use]
    pub fn failure(kind: ErrorKind, detail: impl Into<String>) -> Self {
        Self {
            status: kind.http_status(),
            body: ApiEnvelope::error(detail),
        }
    }
}

/// How the pre-existing task check went for a bulk run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DuplicateCheck {
    /// No target user story, nothing to compare against.
    NotRequested,
    /// Existing tasks were fetched and compared by exact subject.
    Applied {
        /// Tasks found under the user story, including ones sharing a subject.
        existing: usize,
    },
    /// The lookup failed; every draft was treated as new.
    Degraded { reason: String },
}

/// Complete report of one bulk creation run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BulkCreateReport {
    /// One outcome per draft that needed creating, in input order.
    pub data: Vec<TaskCreationOutcome>,
    /// Drafts skipped because a task with the same subject already exists.
    pub already_present: Vec<TaskDraft>,
    pub duplicate_check: DuplicateCheck,
}

impl BulkCreateReport {
    #[must_use]
    pub fn created_count(&self) -> usize {
        self.data.iter().filter(|o| o.is_created()).count()
    }

    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.data.len() - self.created_count()
    }

    #[must_use]
    pub fn failures(&self) -> Vec<(&TaskDraft, &str)> {
        self.data
            .iter()
            .filter_map(|o| match o {
                TaskCreationOutcome::Failed { error, data } => Some((data, error.as_str())),
                TaskCreationOutcome::Created(_) => None,
            })
            .collect()
    }

    /// Human summary, e.g. `"2 tasks created successfully"`.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut message = format!("{} tasks created successfully", self.created_count());
        let failed = self.failed_count();
        if failed > 0 {
            message.push_str(&format!(", {failed} failed"));
        }
        if !self.already_present.is_empty() {
            message.push_str(&format!(
                ", {} already present",
                self.already_present.len()
            ));
        }
        message
    }
}
