//! Raw upstream payload shapes and their translation into canonical records.
//!
//! This is the only place that knows which field name a value came back
//! under. Every mapping is a pure function from a raw struct to a
//! `taiga-core` entity; the same raw struct serves list and detail
//! endpoints, whose payloads differ in how much they embed.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use taiga_core::Identity;
use taiga_core::entities::{
    AssigneeDisplay, Epic, Member, Project, StatusDisplay, Task, TaskStatus, UserStory,
};

#[derive(Debug, Deserialize)]
pub struct RawAuth {
    #[serde(default)]
    pub auth_token: String,
}

#[derive(Debug, Deserialize)]
pub struct RawMe {
    pub id: i64,
    pub username: String,
    pub full_name: Option<String>,
    pub full_name_display: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawStatusInfo {
    pub name: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawAssigneeInfo {
    pub full_name_display: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawMember {
    pub id: i64,
    pub user: Option<i64>,
    #[serde(default)]
    pub full_name_display: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role_name: Option<String>,
    pub role: Option<i64>,
    /// Detail payloads report activity here.
    #[serde(default)]
    pub is_user_active: Option<bool>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawTaskStatus {
    pub id: i64,
    pub name: String,
    pub color: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawProject {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub total_story_points: Option<f64>,
    /// Full member objects on detail endpoints, bare user IDs on list endpoints.
    #[serde(default)]
    pub members: Vec<serde_json::Value>,
    #[serde(default)]
    pub task_statuses: Vec<RawTaskStatus>,
}

/// Shared shape of user stories and epics.
#[derive(Debug, Deserialize)]
pub struct RawStory {
    pub id: i64,
    #[serde(rename = "ref", default)]
    pub reference: Option<i64>,
    pub subject: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: Option<i64>,
    #[serde(default)]
    pub status_extra_info: Option<RawStatusInfo>,
}

#[derive(Debug, Deserialize)]
pub struct RawTask {
    pub id: i64,
    #[serde(rename = "ref", default)]
    pub reference: Option<i64>,
    pub subject: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: Option<i64>,
    #[serde(default)]
    pub status_extra_info: Option<RawStatusInfo>,
    #[serde(default)]
    pub assigned_to: Option<i64>,
    #[serde(default)]
    pub assigned_to_extra_info: Option<RawAssigneeInfo>,
    #[serde(default)]
    pub user_story: Option<i64>,
    #[serde(default)]
    pub project: Option<i64>,
    #[serde(default)]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub modified_date: Option<DateTime<Utc>>,
    /// Optimistic-concurrency counter required by partial updates.
    #[serde(default)]
    pub version: Option<i64>,
}

pub fn identity(raw: RawMe) -> Identity {
    let full_name = raw
        .full_name
        .filter(|n| !n.is_empty())
        .or(raw.full_name_display)
        .unwrap_or_else(|| raw.username.clone());
    Identity {
        id: raw.id,
        username: raw.username,
        full_name,
        email: raw.email.unwrap_or_default(),
    }
}

fn status_display(raw: Option<RawStatusInfo>) -> StatusDisplay {
    let raw = raw.unwrap_or_default();
    StatusDisplay {
        name: raw.name,
        color: raw.color,
    }
}

pub fn member(raw: RawMember) -> Member {
    let full_name_display = raw.full_name_display.unwrap_or_default();
    Member {
        id: raw.id,
        user: raw.user,
        full_name: raw
            .full_name
            .unwrap_or_else(|| full_name_display.clone()),
        full_name_display,
        role_name: raw.role_name.unwrap_or_default(),
        role: raw.role,
        is_active: raw.is_user_active.or(raw.is_active).unwrap_or(true),
        photo: raw.photo,
        username: raw.username,
        color: raw.color,
    }
}

/// Map embedded member objects, skipping entries that are bare IDs.
pub fn members(values: Vec<serde_json::Value>) -> Vec<Member> {
    values
        .into_iter()
        .filter(serde_json::Value::is_object)
        .filter_map(|value| match serde_json::from_value::<RawMember>(value) {
            Ok(raw) => Some(member(raw)),
            Err(error) => {
                tracing::debug!(%error, "skipping unreadable project member");
                None
            }
        })
        .collect()
}

pub fn project(raw: RawProject) -> Project {
    Project {
        id: raw.id,
        name: raw.name,
        slug: raw.slug,
        description: raw.description.unwrap_or_default(),
        total_story_points: raw.total_story_points.unwrap_or(0.0),
        members: members(raw.members),
    }
}

pub fn task_statuses(raw: Vec<RawTaskStatus>) -> Vec<TaskStatus> {
    raw.into_iter()
        .map(|s| TaskStatus {
            id: s.id,
            name: s.name,
            color: s.color,
        })
        .collect()
}

pub fn user_story(raw: RawStory) -> UserStory {
    UserStory {
        id: raw.id,
        reference: raw.reference.unwrap_or_default(),
        subject: raw.subject,
        description: raw.description.unwrap_or_default(),
        status: raw.status,
        status_extra_info: status_display(raw.status_extra_info),
    }
}

pub fn epic(raw: RawStory) -> Epic {
    Epic {
        id: raw.id,
        reference: raw.reference.unwrap_or_default(),
        subject: raw.subject,
        description: raw.description.unwrap_or_default(),
        status: raw.status,
        status_extra_info: status_display(raw.status_extra_info),
    }
}

pub fn task(raw: RawTask) -> Task {
    Task {
        id: raw.id,
        reference: raw.reference.unwrap_or_default(),
        subject: raw.subject,
        description: raw.description.unwrap_or_default(),
        status: raw.status,
        status_extra_info: status_display(raw.status_extra_info),
        assigned_to: raw.assigned_to,
        assigned_to_extra_info: AssigneeDisplay {
            full_name_display: raw.assigned_to_extra_info.and_then(|a| a.full_name_display),
        },
        user_story: raw.user_story,
        project: raw.project,
        created_date: raw.created_date,
        modified_date: raw.modified_date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PROJECT_DETAIL: &str = r##"{
        "id": 133,
        "name": "DASA",
        "slug": "dasa",
        "description": "Data services",
        "total_story_points": null,
        "members": [
            {
                "id": 10,
                "user": 12,
                "full_name_display": "Ana Souza",
                "role_name": "Back",
                "role": 3,
                "is_user_active": false,
                "photo": "https://media.example/ana.png",
                "username": "ana",
                "color": "#FC8EAC"
            },
            {
                "id": 11,
                "user": 13,
                "full_name": "Bruno Lima",
                "full_name_display": "Bruno L.",
                "role_name": "Front",
                "role": 4
            }
        ],
        "task_statuses": [
            {"id": 7, "name": "New", "color": "#999999", "order": 1},
            {"id": 8, "name": "In progress", "color": "#ff9900", "order": 2}
        ]
    }"##;

    const PROJECT_LIST_ITEM: &str = r#"{
        "id": 133,
        "name": "DASA",
        "slug": "dasa",
        "description": null,
        "total_story_points": 21.0,
        "members": [12, 13, 14]
    }"#;

    const TASK: &str = r##"{
        "id": 901,
        "ref": 42,
        "subject": "Wire up login form",
        "description": null,
        "status": 7,
        "status_extra_info": {"name": "New", "color": "#999999", "is_closed": false},
        "assigned_to": null,
        "assigned_to_extra_info": null,
        "user_story": 5258,
        "project": 133,
        "created_date": "2025-03-01T12:00:00.123Z",
        "modified_date": "2025-03-02T08:30:00Z",
        "version": 3
    }"##;

    #[test]
    fn maps_project_detail() {
        let mut raw: RawProject = serde_json::from_str(PROJECT_DETAIL).unwrap();
        let statuses = task_statuses(std::mem::take(&mut raw.task_statuses));
        let project = project(raw);

        assert_eq!(project.total_story_points, 0.0);
        assert_eq!(project.members.len(), 2);

        let ana = &project.members[0];
        assert_eq!(ana.full_name, "Ana Souza");
        assert!(!ana.is_active);
        assert_eq!(ana.photo.as_deref(), Some("https://media.example/ana.png"));

        let bruno = &project.members[1];
        assert_eq!(bruno.full_name, "Bruno Lima");
        assert_eq!(bruno.full_name_display, "Bruno L.");
        assert!(bruno.is_active);

        assert_eq!(statuses.len(), 2);
        assert_eq!(statuses[0].id, 7);
    }

    #[test]
    fn list_item_members_are_skipped() {
        let raw: RawProject = serde_json::from_str(PROJECT_LIST_ITEM).unwrap();
        let project = project(raw);
        assert!(project.members.is_empty());
        assert_eq!(project.description, "");
        assert_eq!(project.total_story_points, 21.0);
    }

    #[test]
    fn maps_task_with_nulls() {
        let raw: RawTask = serde_json::from_str(TASK).unwrap();
        assert_eq!(raw.version, Some(3));
        let task = task(raw);

        assert_eq!(task.reference, 42);
        assert_eq!(task.description, "");
        assert_eq!(task.status_extra_info.name.as_deref(), Some("New"));
        assert!(task.assigned_to.is_none());
        assert!(task.assigned_to_extra_info.full_name_display.is_none());
        assert_eq!(task.user_story, Some(5258));
        assert!(task.created_date.is_some());
    }

    #[test]
    fn maps_story_and_epic_from_same_shape() {
        let json = r#"{"id": 5, "ref": 3, "subject": "Login", "status": 1, "status_extra_info": null}"#;
        let story = user_story(serde_json::from_str(json).unwrap());
        let epic = epic(serde_json::from_str(json).unwrap());
        assert_eq!(story.reference, 3);
        assert_eq!(story.status_extra_info, StatusDisplay::default());
        assert_eq!(epic.subject, "Login");
    }

    #[test]
    fn identity_prefers_full_name() {
        let raw: RawMe = serde_json::from_str(
            r#"{"id": 12, "username": "ana", "full_name": "", "full_name_display": "Ana S.", "email": "ana@example.com"}"#,
        )
        .unwrap();
        let me = identity(raw);
        assert_eq!(me.full_name, "Ana S.");
        assert_eq!(me.email, "ana@example.com");
    }
}
