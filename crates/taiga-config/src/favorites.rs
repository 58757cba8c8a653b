//! Local favorites store location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const DEFAULT_FILE_NAME: &str = "favorites.db";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FavoritesConfig {
    /// Path to the favorites database. Empty means the per-user data dir.
    #[serde(default)]
    pub db_path: String,
}

impl FavoritesConfig {
    /// Resolve the database path.
    ///
    /// An explicit `db_path` wins; otherwise `<data dir>/taiga-bulk/favorites.db`,
    /// or `favorites.db` in the working directory when no data dir exists.
    #[must_use]
    pub fn resolved_path(&self) -> PathBuf {
        if !self.db_path.is_empty() {
            return PathBuf::from(&self.db_path);
        }
        dirs::data_dir().map_or_else(
            || PathBuf::from(DEFAULT_FILE_NAME),
            |dir| dir.join("taiga-bulk").join(DEFAULT_FILE_NAME),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let config = FavoritesConfig {
            db_path: "/tmp/favs.db".into(),
        };
        assert_eq!(config.resolved_path(), PathBuf::from("/tmp/favs.db"));
    }

    #[test]
    fn default_path_ends_with_file_name() {
        let config = FavoritesConfig::default();
        assert!(config.resolved_path().ends_with(DEFAULT_FILE_NAME));
    }
}
