//! Credentials for non-interactive logins.

use serde::{Deserialize, Serialize};

#[derive(Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Taiga username or email.
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,
}

impl AuthConfig {
    /// Check if both username and password are set.
    pub const fn is_configured(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
