//! Favorite user stories.

use taiga_core::entities::FavoriteUserStory;

use crate::FavoritesStore;
use crate::error::FavoritesError;
use crate::helpers::{now_timestamp, parse_datetime};

const ENTITY: &str = "User story";

const COLUMNS: &str =
    "id, user_story_id, user_story_ref, user_story_subject, project_id, created_at";

/// Data needed to bookmark a user story.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFavoriteUserStory {
    pub user_story_id: i64,
    pub user_story_ref: i64,
    pub user_story_subject: String,
    pub project_id: i64,
}

fn row_to_story(row: &libsql::Row) -> Result<FavoriteUserStory, FavoritesError> {
    Ok(FavoriteUserStory {
        id: row.get::<i64>(0)?,
        user_story_id: row.get::<i64>(1)?,
        user_story_ref: row.get::<i64>(2)?,
        user_story_subject: row.get::<String>(3)?,
        project_id: row.get::<i64>(4)?,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

impl FavoritesStore {
    /// Bookmark a user story.
    ///
    /// # Errors
    ///
    /// [`FavoritesError::AlreadyExists`] if the story is already a favorite.
    pub async fn add_user_story(
        &self,
        story: &NewFavoriteUserStory,
    ) -> Result<FavoriteUserStory, FavoritesError> {
        let inserted = self
            .conn
            .execute(
                "INSERT INTO favorite_user_stories
                   (user_story_id, user_story_ref, user_story_subject, project_id, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 ON CONFLICT(user_story_id) DO NOTHING",
                libsql::params![
                    story.user_story_id,
                    story.user_story_ref,
                    story.user_story_subject.as_str(),
                    story.project_id,
                    now_timestamp()
                ],
            )
            .await?;
        if inserted == 0 {
            return Err(FavoritesError::AlreadyExists {
                entity: ENTITY,
                id: story.user_story_id,
            });
        }

        let mut rows = self
            .conn
            .query(
                &format!("SELECT {COLUMNS} FROM favorite_user_stories WHERE user_story_id = ?1"),
                [story.user_story_id],
            )
            .await?;
        let row = rows.next().await?.ok_or(FavoritesError::NoResult)?;
        row_to_story(&row)
    }

    /// Favorite user stories, newest first, optionally for one project only.
    pub async fn list_user_stories(
        &self,
        project_id: Option<i64>,
    ) -> Result<Vec<FavoriteUserStory>, FavoritesError> {
        let mut rows = match project_id {
            Some(project_id) => {
                self.conn
                    .query(
                        &format!(
                            "SELECT {COLUMNS} FROM favorite_user_stories
                             WHERE project_id = ?1 ORDER BY created_at DESC, id DESC"
                        ),
                        [project_id],
                    )
                    .await?
            }
            None => {
                self.conn
                    .query(
                        &format!(
                            "SELECT {COLUMNS} FROM favorite_user_stories
                             ORDER BY created_at DESC, id DESC"
                        ),
                        (),
                    )
                    .await?
            }
        };
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_story(&row)?);
        }
        Ok(results)
    }

    /// # Errors
    ///
    /// [`FavoritesError::NotFound`] if the story is not a favorite.
    pub async fn remove_user_story(&self, user_story_id: i64) -> Result<(), FavoritesError> {
        let deleted = self
            .conn
            .execute(
                "DELETE FROM favorite_user_stories WHERE user_story_id = ?1",
                [user_story_id],
            )
            .await?;
        if deleted == 0 {
            return Err(FavoritesError::NotFound {
                entity: ENTITY,
                id: user_story_id,
            });
        }
        Ok(())
    }
}
