//! Tasks: read, create, partial update, delete.

use serde::Serialize;
use taiga_core::entities::Task;

use crate::error::{ClientError, Degraded};
use crate::session::SessionClient;
use crate::wire::{self, RawTask};

/// Body of a task creation.
///
/// Serialized with every key present; absent optionals go out as `null`
/// and an absent description as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewTask {
    pub project: i64,
    pub subject: String,
    pub description: String,
    pub status: Option<i64>,
    pub assigned_to: Option<i64>,
    pub user_story: Option<i64>,
}

impl NewTask {
    #[must_use]
    pub fn new(project: i64, subject: impl Into<String>) -> Self {
        Self {
            project,
            subject: subject.into(),
            ..Self::default()
        }
    }
}

/// Fields of a partial task update. Only `Some` fields are transmitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i64>,
    /// `Some(None)` unassigns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<Option<i64>>,
}

impl TaskPatch {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.subject.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.assigned_to.is_none()
    }
}

pub struct TaskPatchBuilder(TaskPatch);

impl TaskPatchBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(TaskPatch::default())
    }

    #[must_use]
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.0.subject = Some(subject.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.0.description = Some(description.into());
        self
    }

    #[must_use]
    pub const fn status(mut self, status: i64) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub const fn assigned_to(mut self, assigned_to: Option<i64>) -> Self {
        self.0.assigned_to = Some(assigned_to);
        self
    }

    #[must_use]
    pub fn build(self) -> TaskPatch {
        self.0
    }
}

impl Default for TaskPatchBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct VersionedPatch<'a> {
    #[serde(flatten)]
    patch: &'a TaskPatch,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<i64>,
}

impl SessionClient<'_> {
    async fn raw_task(&self, id: i64) -> Result<RawTask, ClientError> {
        self.get_entity("task", &format!("tasks/{id}"), id).await
    }

    /// # Errors
    ///
    /// [`ClientError::NotFound`] if the task does not exist.
    pub async fn get_task(&self, id: i64) -> Result<Task, ClientError> {
        self.raw_task(id).await.map(wire::task)
    }

    /// All tasks of a project, optionally narrowed to one user story.
    ///
    /// # Errors
    ///
    /// Returns the first page's error if the listing cannot start.
    pub async fn list_tasks(
        &self,
        project_id: i64,
        user_story: Option<i64>,
    ) -> Result<Vec<Task>, ClientError> {
        let mut filters = vec![("project", project_id.to_string())];
        if let Some(story) = user_story {
            filters.push(("user_story", story.to_string()));
        }
        let drained = self.drain::<RawTask>("tasks", &filters).await?;
        Ok(drained.map(wire::task).items)
    }

    /// First task status of a project, used when a creation names none.
    ///
    /// # Errors
    ///
    /// [`Degraded`] if the statuses cannot be read; the caller creates the
    /// task without a status.
    pub async fn default_task_status(&self, project_id: i64) -> Result<Option<i64>, Degraded> {
        self.get_task_statuses(project_id)
            .await
            .map(|statuses| statuses.first().map(|s| s.id))
            .map_err(|cause| Degraded::new("task status lookup", cause))
    }

    /// Create one task.
    ///
    /// When `task.status` is `None` the project's first task status is
    /// filled in; if that lookup fails the task is created without one.
    ///
    /// # Errors
    ///
    /// [`ClientError::Upstream`] with the status code and truncated body if
    /// the upstream does not answer 200 or 201.
    pub async fn create_task(&self, task: &NewTask) -> Result<Task, ClientError> {
        let mut body = task.clone();
        if body.status.is_none() {
            match self.default_task_status(body.project).await {
                Ok(status) => body.status = status,
                Err(degraded) => {
                    tracing::warn!(project = body.project, %degraded, "creating task without status");
                }
            }
        }

        let raw: RawTask = self
            .write_json(reqwest::Method::POST, "tasks", &body)
            .await?;
        tracing::debug!(id = raw.id, project = body.project, "task created");
        Ok(wire::task(raw))
    }

    /// Apply a partial update.
    ///
    /// Reads the task's current `version` and sends it with only the
    /// supplied fields. An empty patch sends nothing and returns the task as
    /// it is.
    ///
    /// # Errors
    ///
    /// [`ClientError::NotFound`] if the task does not exist, or the upstream
    /// error if the patch is rejected (for example a version conflict).
    pub async fn update_task(&self, id: i64, patch: &TaskPatch) -> Result<Task, ClientError> {
        let current = self.raw_task(id).await?;
        if patch.is_empty() {
            return Ok(wire::task(current));
        }

        let body = VersionedPatch {
            patch,
            version: current.version,
        };
        let raw: RawTask = self
            .write_json(reqwest::Method::PATCH, &format!("tasks/{id}"), &body)
            .await
            .map_err(|e| e.or_not_found("task", id))?;
        Ok(wire::task(raw))
    }

    /// # Errors
    ///
    /// [`ClientError::NotFound`] if the task does not exist.
    pub async fn delete_task(&self, id: i64) -> Result<(), ClientError> {
        self.delete(&format!("tasks/{id}"))
            .await
            .map_err(|e| e.or_not_found("task", id))?;
        tracing::debug!(id, "task deleted");
        Ok(())
    }
}
