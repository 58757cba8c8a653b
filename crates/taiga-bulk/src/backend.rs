//! Upstream seam used by the reconciler.

use async_trait::async_trait;
use taiga_client::{ClientError, NewTask, SessionClient};
use taiga_core::entities::Task;

/// The two upstream operations a bulk run needs.
#[async_trait]
pub trait TaskBackend: Send + Sync {
    /// Every task of `project_id` under `user_story`.
    async fn existing_tasks(
        &self,
        project_id: i64,
        user_story: i64,
    ) -> Result<Vec<Task>, ClientError>;

    /// Create one task, applying the adapter's status default.
    async fn create_task(&self, task: &NewTask) -> Result<Task, ClientError>;
}

#[async_trait]
impl TaskBackend for SessionClient<'_> {
    async fn existing_tasks(
        &self,
        project_id: i64,
        user_story: i64,
    ) -> Result<Vec<Task>, ClientError> {
        self.list_tasks(project_id, Some(user_story)).await
    }

    async fn create_task(&self, task: &NewTask) -> Result<Task, ClientError> {
        SessionClient::create_task(self, task).await
    }
}
