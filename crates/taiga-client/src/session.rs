//! Session-bound request helpers.

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use taiga_core::{Identity, Session};

use crate::TaigaClient;
use crate::error::ClientError;
use crate::http::check_response;

/// A [`TaigaClient`] paired with a validated [`Session`].
///
/// Obtained from [`TaigaClient::session`]. Every request carries the
/// session's bearer token and goes to the session's API root.
#[derive(Debug, Clone, Copy)]
pub struct SessionClient<'a> {
    client: &'a TaigaClient,
    session: &'a Session,
}

impl<'a> SessionClient<'a> {
    pub(crate) const fn new(client: &'a TaigaClient, session: &'a Session) -> Self {
        Self { client, session }
    }

    /// The caller this session belongs to.
    #[must_use]
    pub const fn identity(&self) -> &Identity {
        &self.session.user
    }

    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.client.page_size
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.session.api_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: reqwest::Method, path: &str, timeout: Duration) -> reqwest::RequestBuilder {
        self.client
            .http
            .request(method, self.url(path))
            .bearer_auth(&self.session.auth_token)
            .timeout(timeout)
    }

    /// GET `path` with query parameters, checking the status.
    pub(crate) async fn get<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<reqwest::Response, ClientError> {
        let resp = self
            .request(reqwest::Method::GET, path, self.client.read_timeout)
            .query(query)
            .send()
            .await?;
        check_response(resp).await
    }

    /// GET `path` and decode the body as `R`.
    pub(crate) async fn get_json<R: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<R, ClientError> {
        let resp = self.get(path, query).await?;
        decode(resp).await
    }

    /// GET a single entity, reporting a 404 as [`ClientError::NotFound`].
    pub(crate) async fn get_entity<R: DeserializeOwned>(
        &self,
        entity: &'static str,
        path: &str,
        id: impl ToString,
    ) -> Result<R, ClientError> {
        self.get_json(path, &[])
            .await
            .map_err(|e| e.or_not_found(entity, id))
    }

    /// Send a JSON body with the write timeout and decode the answer as `R`.
    pub(crate) async fn write_json<B, R>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: &B,
    ) -> Result<R, ClientError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let resp = self
            .request(method, path, self.client.write_timeout)
            .json(body)
            .send()
            .await?;
        decode(check_response(resp).await?).await
    }

    /// DELETE `path` with the write timeout.
    pub(crate) async fn delete(&self, path: &str) -> Result<(), ClientError> {
        let resp = self
            .request(reqwest::Method::DELETE, path, self.client.write_timeout)
            .send()
            .await?;
        check_response(resp).await?;
        Ok(())
    }
}

async fn decode<R: DeserializeOwned>(resp: reqwest::Response) -> Result<R, ClientError> {
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ClientError::Parse(e.to_string()))
}
