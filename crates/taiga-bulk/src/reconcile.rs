//! Duplicate check and sequential creation.

use std::collections::HashSet;

use taiga_client::{Degraded, NewTask};
use taiga_core::entities::{TaskCreationOutcome, TaskDraft};
use taiga_core::responses::{BulkCreateReport, DuplicateCheck};

use crate::backend::TaskBackend;
use crate::error::BulkError;

/// One bulk creation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkTaskRequest {
    pub project_id: i64,
    /// Target user story. Enables the duplicate check and is set on every
    /// created task.
    pub user_story_id: Option<i64>,
    /// Desired tasks, in creation order.
    pub tasks: Vec<TaskDraft>,
    /// Status for drafts that carry none.
    pub status_id: Option<i64>,
    /// Assignee for drafts that carry none.
    pub assigned_to_id: Option<i64>,
}

impl BulkTaskRequest {
    #[must_use]
    pub const fn new(project_id: i64, tasks: Vec<TaskDraft>) -> Self {
        Self {
            project_id,
            user_story_id: None,
            tasks,
            status_id: None,
            assigned_to_id: None,
        }
    }

    #[must_use]
    pub const fn for_user_story(mut self, user_story_id: i64) -> Self {
        self.user_story_id = Some(user_story_id);
        self
    }

    /// # Errors
    ///
    /// [`BulkError::EmptyBatch`] for an empty list. Problems with single
    /// drafts are reported per item by [`reconcile`].
    pub fn validate(&self) -> Result<(), BulkError> {
        if self.tasks.is_empty() {
            return Err(BulkError::EmptyBatch);
        }
        Ok(())
    }

    fn new_task(&self, draft: &TaskDraft) -> NewTask {
        NewTask {
            project: self.project_id,
            subject: draft.subject.clone(),
            description: draft.description.clone().unwrap_or_default(),
            status: draft.status.or(self.status_id),
            assigned_to: draft.assigned_to.or(self.assigned_to_id),
            user_story: self.user_story_id,
        }
    }
}

/// Number of tasks already under the target user story, and their subjects.
async fn existing_subjects<B: TaskBackend + ?Sized>(
    backend: &B,
    project_id: i64,
    user_story: i64,
) -> Result<(usize, HashSet<String>), Degraded> {
    backend
        .existing_tasks(project_id, user_story)
        .await
        .map(|tasks| (tasks.len(), tasks.into_iter().map(|t| t.subject).collect()))
        .map_err(|cause| Degraded::new("existing task lookup", cause))
}

/// A draft the upstream would refuse outright; recorded as failed without a call.
fn rejected_draft(draft: &TaskDraft) -> Option<&'static str> {
    draft
        .subject
        .chars()
        .all(char::is_whitespace)
        .then_some("task subject is empty")
}

/// Create every draft that is not already present.
///
/// 1. With a target user story, read the existing tasks and skip drafts
///    whose subject matches one exactly (no trimming, case-sensitive). A
///    failed lookup is logged and every draft is treated as new.
/// 2. Create the remaining drafts one after another, in input order.
/// 3. A failed creation is recorded as `{error, data}` and the run goes on.
///    A draft with a blank subject fails the same way, without an upstream
///    call.
///
/// # Errors
///
/// Only the up-front validation in [`BulkTaskRequest::validate`]; once
/// creation starts every failure becomes part of the report.
pub async fn reconcile<B: TaskBackend + ?Sized>(
    backend: &B,
    request: &BulkTaskRequest,
) -> Result<BulkCreateReport, BulkError> {
    request.validate()?;

    let (existing, duplicate_check) = match request.user_story_id {
        None => (HashSet::new(), DuplicateCheck::NotRequested),
        Some(story) => match existing_subjects(backend, request.project_id, story).await {
            Ok((count, subjects)) => (subjects, DuplicateCheck::Applied { existing: count }),
            Err(degraded) => {
                tracing::warn!(project = request.project_id, story, %degraded, "creating all drafts");
                (
                    HashSet::new(),
                    DuplicateCheck::Degraded {
                        reason: degraded.to_string(),
                    },
                )
            }
        },
    };

    let (already_present, to_create): (Vec<&TaskDraft>, Vec<&TaskDraft>) = request
        .tasks
        .iter()
        .partition(|draft| existing.contains(&draft.subject));

    let mut outcomes = Vec::with_capacity(to_create.len());
    for draft in to_create {
        if let Some(reason) = rejected_draft(draft) {
            tracing::warn!(subject = %draft.subject, reason, "task creation skipped");
            outcomes.push(TaskCreationOutcome::Failed {
                error: reason.to_string(),
                data: draft.clone(),
            });
            continue;
        }
        let outcome = match backend.create_task(&request.new_task(draft)).await {
            Ok(task) => {
                tracing::debug!(id = task.id, subject = %task.subject, "task created");
                TaskCreationOutcome::Created(Box::new(task))
            }
            Err(error) => {
                tracing::warn!(subject = %draft.subject, %error, "task creation failed");
                TaskCreationOutcome::Failed {
                    error: error.to_string(),
                    data: draft.clone(),
                }
            }
        };
        outcomes.push(outcome);
    }

    let report = BulkCreateReport {
        data: outcomes,
        already_present: already_present.into_iter().cloned().collect(),
        duplicate_check,
    };
    tracing::info!(
        project = request.project_id,
        created = report.created_count(),
        failed = report.failed_count(),
        skipped = report.already_present.len(),
        "bulk run finished"
    );
    Ok(report)
}
