//! Credential login.

use serde::Serialize;
use taiga_core::Session;

use crate::error::ClientError;
use crate::http::check_response;
use crate::wire::{self, RawAuth, RawMe};
use crate::{TaigaClient, normalize_api_url};

#[derive(Serialize)]
struct AuthRequest<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    username: &'a str,
    password: &'a str,
}

impl TaigaClient {
    /// Exchange credentials for a [`Session`].
    ///
    /// 1. `POST {api}/auth` with `{"type": "normal", username, password}`
    /// 2. `GET {api}/users/me` with the returned token to resolve the identity
    ///
    /// `base_url` selects another Taiga instance for this session only; the
    /// client's configured instance is used otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Authentication`] carrying the upstream message
    /// if either request fails at the transport level, is rejected, or the
    /// response carries no token.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        base_url: Option<&str>,
    ) -> Result<Session, ClientError> {
        let api_url = base_url.map_or_else(|| self.api_url.clone(), normalize_api_url);
        tracing::debug!(%api_url, username, "logging in");

        let auth: RawAuth = async {
            let resp = self
                .http
                .post(format!("{api_url}/auth"))
                .timeout(self.read_timeout)
                .json(&AuthRequest {
                    kind: "normal",
                    username,
                    password,
                })
                .send()
                .await?;
            Ok::<_, ClientError>(check_response(resp).await?.json().await?)
        }
        .await
        .map_err(into_auth_error)?;

        if auth.auth_token.is_empty() {
            return Err(ClientError::Authentication(
                "upstream returned no auth token".into(),
            ));
        }

        let me: RawMe = async {
            let resp = self
                .http
                .get(format!("{api_url}/users/me"))
                .bearer_auth(&auth.auth_token)
                .timeout(self.read_timeout)
                .send()
                .await?;
            Ok::<_, ClientError>(check_response(resp).await?.json().await?)
        }
        .await
        .map_err(into_auth_error)?;

        let identity = wire::identity(me);
        tracing::info!(user_id = identity.id, username = %identity.username, "logged in");
        Ok(Session::new(auth.auth_token, identity, api_url))
    }
}

fn into_auth_error(error: ClientError) -> ClientError {
    match error {
        ClientError::Upstream { message, .. } => ClientError::Authentication(message),
        ClientError::Authentication(_) => error,
        other => ClientError::Authentication(other.to_string()),
    }
}
