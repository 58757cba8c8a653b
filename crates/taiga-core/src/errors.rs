//! Cross-cutting error types.
//!
//! Crate-specific errors (`ClientError`, `FavoritesError`, `ConfigError`) live
//! in their own crates. Each of them classifies itself into an [`ErrorKind`]
//! so the operation surface can answer with one consistent status.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coarse classification of a failure, as seen by a caller of the operation
/// surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Duplicate entry or rejected input.
    Conflict,
    /// No session, or the upstream refused the credentials.
    Unauthenticated,
    /// The requested entity does not exist.
    NotFound,
    /// Any other upstream or unexpected failure.
    Upstream,
}

impl ErrorKind {
    /// HTTP-style status code reported for this kind.
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::Conflict => 400,
            Self::Unauthenticated => 401,
            Self::NotFound => 404,
            Self::Upstream => 500,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Conflict => "conflict",
            Self::Unauthenticated => "unauthenticated",
            Self::NotFound => "not_found",
            Self::Upstream => "upstream",
        }
    }
}

/// Errors that can be raised by any crate in the workspace.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Input failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Validation(_) => ErrorKind::Conflict,
            Self::Other(_) => ErrorKind::Upstream,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(ErrorKind::Conflict.http_status(), 400);
        assert_eq!(ErrorKind::Unauthenticated.http_status(), 401);
        assert_eq!(ErrorKind::NotFound.http_status(), 404);
        assert_eq!(ErrorKind::Upstream.http_status(), 500);
    }

    #[test]
    fn core_error_kinds() {
        let err = CoreError::NotFound {
            entity_type: "task".into(),
            id: "7".into(),
        };
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "Entity not found: task 7");
        assert_eq!(
            CoreError::Validation("empty".into()).kind(),
            ErrorKind::Conflict
        );
    }
}
