//! Client error types.

use taiga_core::ErrorKind;
use thiserror::Error;

/// Errors that can occur when talking to the upstream Taiga API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Login was refused or the auth endpoint could not be reached.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// An entity operation was attempted without a usable session.
    #[error("Not authenticated. Please login first.")]
    NotAuthenticated,

    /// The requested entity does not exist upstream.
    #[error("{entity} {id} not found")]
    NotFound {
        /// Entity type, e.g. `task`.
        entity: &'static str,
        /// ID or slug that was looked up.
        id: String,
    },

    /// The API answered with a non-success status.
    #[error("upstream error ({status}): {message}")]
    Upstream {
        /// HTTP status code returned by the API.
        status: u16,
        /// Error message or truncated response body.
        message: String,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to parse an API response.
    #[error("parse error: {0}")]
    Parse(String),
}

impl ClientError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Authentication(_) | Self::NotAuthenticated => ErrorKind::Unauthenticated,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Upstream { .. } | Self::Http(_) | Self::Parse(_) => ErrorKind::Upstream,
        }
    }

    /// Status code of an upstream rejection, if this is one.
    #[must_use]
    pub const fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Turn a 404 rejection into [`ClientError::NotFound`] for `entity`/`id`.
    #[must_use]
    pub fn or_not_found(self, entity: &'static str, id: impl ToString) -> Self {
        match self {
            Self::Upstream { status: 404, .. } => Self::NotFound {
                entity,
                id: id.to_string(),
            },
            other => other,
        }
    }
}

/// A best-effort step that could not run; the caller proceeds without it.
#[derive(Debug)]
pub struct Degraded {
    /// What was being attempted, e.g. `task status lookup`.
    pub step: &'static str,
    pub cause: ClientError,
}

impl Degraded {
    #[must_use]
    pub const fn new(step: &'static str, cause: ClientError) -> Self {
        Self { step, cause }
    }
}

impl std::fmt::Display for Degraded {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} skipped: {}", self.step, self.cause)
    }
}
