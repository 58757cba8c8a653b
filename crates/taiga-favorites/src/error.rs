//! Favorites store error types.

use taiga_core::ErrorKind;
use thiserror::Error;

/// Errors from favorites store operations.
#[derive(Debug, Error)]
pub enum FavoritesError {
    /// The entry is already bookmarked.
    #[error("{entity} already in favorites")]
    AlreadyExists { entity: &'static str, id: i64 },

    /// No bookmark for this ID.
    #[error("{entity} not in favorites")]
    NotFound { entity: &'static str, id: i64 },

    /// A SQL query failed or returned unreadable data.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}

impl FavoritesError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::AlreadyExists { .. } => ErrorKind::Conflict,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Query(_) | Self::Migration(_) | Self::NoResult | Self::LibSql(_) => {
                ErrorKind::Upstream
            }
        }
    }
}
