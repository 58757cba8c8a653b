//! Projects and project metadata.

use std::str::FromStr;

use taiga_core::entities::{Member, Project, TaskStatus};

use crate::error::ClientError;
use crate::session::SessionClient;
use crate::wire::{self, RawProject};

/// How a project is addressed: numeric ID or slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectRef {
    Id(i64),
    Slug(String),
}

impl FromStr for ProjectRef {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(s.parse::<i64>()
            .map_or_else(|_| Self::Slug(s.to_string()), Self::Id))
    }
}

impl std::fmt::Display for ProjectRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Slug(slug) => f.write_str(slug),
        }
    }
}

impl SessionClient<'_> {
    async fn raw_project(&self, project: &ProjectRef) -> Result<RawProject, ClientError> {
        match project {
            ProjectRef::Id(id) => {
                self.get_entity("project", &format!("projects/{id}"), id)
                    .await
            }
            ProjectRef::Slug(slug) => self
                .get_json("projects/by_slug", &[("slug", slug.clone())])
                .await
                .map_err(|e| e.or_not_found("project", slug)),
        }
    }

    /// Fetch one project by ID or slug, including its members.
    ///
    /// # Errors
    ///
    /// [`ClientError::NotFound`] if the upstream has no such project.
    pub async fn get_project(&self, project: &ProjectRef) -> Result<Project, ClientError> {
        self.raw_project(project).await.map(wire::project)
    }

    /// List the projects the session's user is a member of.
    ///
    /// # Errors
    ///
    /// Returns the first page's error if the listing cannot start.
    pub async fn list_projects(&self) -> Result<Vec<Project>, ClientError> {
        let member = self.identity().id.to_string();
        let drained = self
            .drain::<RawProject>("projects", &[("member", member)])
            .await?;
        Ok(drained.map(wire::project).items)
    }

    /// Task statuses configured on a project, in upstream order.
    ///
    /// # Errors
    ///
    /// [`ClientError::NotFound`] if the project does not exist.
    pub async fn get_task_statuses(&self, project_id: i64) -> Result<Vec<TaskStatus>, ClientError> {
        let raw = self.raw_project(&ProjectRef::Id(project_id)).await?;
        Ok(wire::task_statuses(raw.task_statuses))
    }

    /// Members of a project. The slug endpoint is used when a slug is given.
    ///
    /// # Errors
    ///
    /// [`ClientError::NotFound`] if the project does not exist.
    pub async fn get_project_members(
        &self,
        project_id: i64,
        slug: Option<&str>,
    ) -> Result<Vec<Member>, ClientError> {
        let project = slug.map_or(ProjectRef::Id(project_id), |s| ProjectRef::Slug(s.to_string()));
        let raw = self.raw_project(&project).await?;
        Ok(wire::members(raw.members))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("133", ProjectRef::Id(133))]
    #[case(" 7 ", ProjectRef::Id(7))]
    #[case("dasa", ProjectRef::Slug("dasa".into()))]
    #[case("ana-project-2", ProjectRef::Slug("ana-project-2".into()))]
    fn parses_project_ref(#[case] input: &str, #[case] expected: ProjectRef) {
        assert_eq!(input.parse::<ProjectRef>().unwrap(), expected);
    }

    #[test]
    fn displays_project_ref() {
        assert_eq!(ProjectRef::Id(5).to_string(), "5");
        assert_eq!(ProjectRef::Slug("dasa".into()).to_string(), "dasa");
    }
}
