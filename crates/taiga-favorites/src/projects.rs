//! Favorite projects.

use taiga_core::entities::FavoriteProject;

use crate::FavoritesStore;
use crate::error::FavoritesError;
use crate::helpers::{now_timestamp, parse_datetime};

const ENTITY: &str = "Project";

/// Data needed to bookmark a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFavoriteProject {
    pub project_id: i64,
    pub project_name: String,
    pub project_slug: String,
}

fn row_to_project(row: &libsql::Row) -> Result<FavoriteProject, FavoritesError> {
    Ok(FavoriteProject {
        id: row.get::<i64>(0)?,
        project_id: row.get::<i64>(1)?,
        project_name: row.get::<String>(2)?,
        project_slug: row.get::<String>(3)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

impl FavoritesStore {
    /// Bookmark a project.
    ///
    /// # Errors
    ///
    /// [`FavoritesError::AlreadyExists`] if the project is already a favorite.
    pub async fn add_project(
        &self,
        project: &NewFavoriteProject,
    ) -> Result<FavoriteProject, FavoritesError> {
        let inserted = self
            .conn
            .execute(
                "INSERT INTO favorite_projects (project_id, project_name, project_slug, created_at)
                 VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT(project_id) DO NOTHING",
                libsql::params![
                    project.project_id,
                    project.project_name.as_str(),
                    project.project_slug.as_str(),
                    now_timestamp()
                ],
            )
            .await?;
        if inserted == 0 {
            return Err(FavoritesError::AlreadyExists {
                entity: ENTITY,
                id: project.project_id,
            });
        }

        let mut rows = self
            .conn
            .query(
                "SELECT id, project_id, project_name, project_slug, created_at
                 FROM favorite_projects WHERE project_id = ?1",
                [project.project_id],
            )
            .await?;
        let row = rows.next().await?.ok_or(FavoritesError::NoResult)?;
        row_to_project(&row)
    }

    /// All favorite projects, newest first.
    pub async fn list_projects(&self) -> Result<Vec<FavoriteProject>, FavoritesError> {
        let mut rows = self
            .conn
            .query(
                "SELECT id, project_id, project_name, project_slug, created_at
                 FROM favorite_projects ORDER BY created_at DESC, id DESC",
                (),
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_project(&row)?);
        }
        Ok(results)
    }

    /// # Errors
    ///
    /// [`FavoritesError::NotFound`] if the project is not a favorite.
    pub async fn remove_project(&self, project_id: i64) -> Result<(), FavoritesError> {
        let deleted = self
            .conn
            .execute(
                "DELETE FROM favorite_projects WHERE project_id = ?1",
                [project_id],
            )
            .await?;
        if deleted == 0 {
            return Err(FavoritesError::NotFound {
                entity: ENTITY,
                id: project_id,
            });
        }
        Ok(())
    }
}
