use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The authenticated caller, as reported by the upstream `users/me` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Identity {
    pub id: i64,
    pub username: String,
    pub full_name: String,
    pub email: String,
}

/// An authenticated upstream session.
///
/// Produced by a successful login and passed explicitly into every entity
/// operation. Nothing is persisted: a new login yields a new value and the
/// old one is simply dropped by its owner.
#[derive(Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Session {
    /// Bearer token sent as `Authorization: Bearer <token>`.
    pub auth_token: String,
    pub user: Identity,
    /// API root this session was issued by, e.g. `https://tree.taiga.io/api/v1`.
    pub api_url: String,
}

impl Session {
    #[must_use]
    pub fn new(auth_token: impl Into<String>, user: Identity, api_url: impl Into<String>) -> Self {
        Self {
            auth_token: auth_token.into(),
            user,
            api_url: api_url.into(),
        }
    }

    /// Whether the session carries a usable token.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        !self.auth_token.is_empty()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("auth_token", &"<redacted>")
            .field("user", &self.user)
            .field("api_url", &self.api_url)
            .finish()
    }
}
