//! Schema setup, embedded at compile time and re-run on every open.

use crate::FavoritesStore;
use crate::error::FavoritesError;

const MIGRATION_001: &str = include_str!("../migrations/001_favorites.sql");

impl FavoritesStore {
    pub(crate) async fn run_migrations(&self) -> Result<(), FavoritesError> {
        self.conn
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| FavoritesError::Migration(format!("001_favorites: {e}")))?;
        Ok(())
    }
}
