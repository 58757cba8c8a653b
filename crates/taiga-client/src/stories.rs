//! User stories and epics.

use std::str::FromStr;

use taiga_core::entities::{Epic, UserStory};
use taiga_core::pagination::Page;

use crate::error::ClientError;
use crate::pagination::map_page;
use crate::session::SessionClient;
use crate::wire::{self, RawStory};

/// Milestone filter for story search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MilestoneFilter {
    /// Stories not assigned to any sprint.
    #[default]
    Backlog,
    /// Stories in one sprint.
    Id(i64),
    /// No milestone filter.
    Any,
}

impl MilestoneFilter {
    /// Query value sent upstream, `None` when the parameter is omitted.
    #[must_use]
    pub fn query_value(self) -> Option<String> {
        match self {
            Self::Backlog => Some("null".to_string()),
            Self::Id(id) => Some(id.to_string()),
            Self::Any => None,
        }
    }
}

impl FromStr for MilestoneFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "null" | "backlog" => Ok(Self::Backlog),
            "any" | "all" => Ok(Self::Any),
            other => other
                .parse()
                .map(Self::Id)
                .map_err(|_| format!("invalid milestone '{other}': expected an ID, 'backlog' or 'any'")),
        }
    }
}

/// Parameters of a single-page story search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorySearch {
    pub project_id: i64,
    /// Free-text filter, sent as `q` when non-empty.
    pub query: Option<String>,
    pub milestone: MilestoneFilter,
    pub page: u32,
    pub page_size: u32,
}

impl StorySearch {
    #[must_use]
    pub fn new(project_id: i64) -> Self {
        Self {
            project_id,
            query: None,
            milestone: MilestoneFilter::Backlog,
            page: 1,
            page_size: 100,
        }
    }

    fn filters(&self) -> Vec<(&'static str, String)> {
        let mut filters = vec![("project", self.project_id.to_string())];
        if let Some(milestone) = self.milestone.query_value() {
            filters.push(("milestone", milestone));
        }
        if let Some(q) = self.query.as_deref().filter(|q| !q.is_empty()) {
            filters.push(("q", q.to_string()));
        }
        filters
    }
}

impl SessionClient<'_> {
    /// # Errors
    ///
    /// [`ClientError::NotFound`] if the story does not exist.
    pub async fn get_user_story(&self, id: i64) -> Result<UserStory, ClientError> {
        self.get_entity::<RawStory>("user story", &format!("userstories/{id}"), id)
            .await
            .map(wire::user_story)
    }

    /// All user stories of a project.
    ///
    /// # Errors
    ///
    /// Returns the first page's error if the listing cannot start.
    pub async fn list_user_stories(&self, project_id: i64) -> Result<Vec<UserStory>, ClientError> {
        let drained = self
            .drain::<RawStory>("userstories", &[("project", project_id.to_string())])
            .await?;
        Ok(drained.map(wire::user_story).items)
    }

    /// One page of user stories with totals from the pagination headers.
    ///
    /// # Errors
    ///
    /// Returns any transport, status or decoding error.
    pub async fn search_user_stories(
        &self,
        search: &StorySearch,
    ) -> Result<Page<UserStory>, ClientError> {
        let page = self
            .search_page::<RawStory>("userstories", &search.filters(), search.page, search.page_size)
            .await?;
        tracing::debug!(
            project = search.project_id,
            total = page.pagination.total,
            page = page.pagination.page,
            "story search"
        );
        Ok(map_page(page, wire::user_story))
    }

    /// # Errors
    ///
    /// [`ClientError::NotFound`] if the epic does not exist.
    pub async fn get_epic(&self, id: i64) -> Result<Epic, ClientError> {
        self.get_entity::<RawStory>("epic", &format!("epics/{id}"), id)
            .await
            .map(wire::epic)
    }

    /// All epics of a project.
    ///
    /// # Errors
    ///
    /// Returns the first page's error if the listing cannot start.
    pub async fn list_epics(&self, project_id: i64) -> Result<Vec<Epic>, ClientError> {
        let drained = self
            .drain::<RawStory>("epics", &[("project", project_id.to_string())])
            .await?;
        Ok(drained.map(wire::epic).items)
    }
}
