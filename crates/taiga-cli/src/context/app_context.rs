use anyhow::Context;
use taiga_client::{ClientError, SessionClient, TaigaClient};
use taiga_config::TaigaConfig;
use taiga_core::Session;

use crate::cli::GlobalFlags;

/// Username and password for one invocation.
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Explicit values win over `auth.*` from config.
    ///
    /// # Errors
    ///
    /// [`ClientError::NotAuthenticated`] when neither source has both values.
    pub fn resolve(
        config: &TaigaConfig,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<Self, ClientError> {
        let username = username.unwrap_or(&config.auth.username);
        let password = password.unwrap_or(&config.auth.password);
        if username.is_empty() || password.is_empty() {
            return Err(ClientError::NotAuthenticated);
        }
        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Client plus the session opened for this invocation.
pub struct AppContext {
    pub client: TaigaClient,
    pub session: Session,
}

impl AppContext {
    /// Build the client and log in.
    pub async fn login(
        config: &TaigaConfig,
        credentials: &Credentials,
        flags: &GlobalFlags,
    ) -> anyhow::Result<Self> {
        let client = TaigaClient::from_config(config).context("failed to build HTTP client")?;
        let session = client
            .login(&credentials.username, &credentials.password, flags.url.as_deref())
            .await?;
        Ok(Self { client, session })
    }

    /// Session-bound view of the client.
    pub fn upstream(&self) -> Result<SessionClient<'_>, ClientError> {
        self.client.session(&self.session)
    }
}
