//! # taiga-favorites
//!
//! Local bookmarks for projects and user stories, kept in a libSQL file
//! beside the user's config. Favorites are independent of any upstream
//! session: they store the IDs plus enough display data to list them
//! without calling Taiga.

pub mod error;
pub mod helpers;
mod migrations;
mod projects;
mod stories;

pub use error::FavoritesError;
pub use projects::NewFavoriteProject;
pub use stories::NewFavoriteUserStory;

use libsql::Builder;

/// Handle to the favorites database.
pub struct FavoritesStore {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl FavoritesStore {
    /// Open (or create) a local database at `path`. `":memory:"` gives a
    /// throwaway store.
    ///
    /// Runs migrations on every open.
    ///
    /// # Errors
    ///
    /// Returns `FavoritesError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, FavoritesError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;
        let store = Self { db, conn };
        store.run_migrations().await?;
        tracing::debug!(path, "favorites store opened");
        Ok(store)
    }

    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}
