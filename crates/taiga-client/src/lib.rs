//! # taiga-client
//!
//! Authenticated HTTP client for the Taiga REST API.
//!
//! - [`TaigaClient::login`] exchanges credentials for an explicit
//!   [`Session`] value; nothing is kept in process-wide state.
//! - [`TaigaClient::session`] checks that a session is usable and returns a
//!   [`SessionClient`] exposing the entity operations (projects, user
//!   stories, epics, tasks, metadata).
//! - Listing goes through the pagination engine: fetch-all loops over fixed
//!   size pages, single-page search reads totals from response headers.
//! - Every upstream payload is translated into a `taiga-core` record in
//!   [`wire`].

pub mod auth;
pub mod pagination;
pub mod projects;
pub mod session;
pub mod stories;
pub mod tasks;
pub mod wire;

mod error;
mod http;

pub use error::{ClientError, Degraded};
pub use pagination::Drained;
pub use projects::ProjectRef;
pub use session::SessionClient;
pub use stories::{MilestoneFilter, StorySearch};
pub use tasks::{NewTask, TaskPatch, TaskPatchBuilder};

use std::time::Duration;

use taiga_config::{TaigaConfig, UpstreamConfig};
use taiga_core::Session;

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// HTTP client bound to one Taiga instance.
///
/// Holds no session: log in with [`Self::login`] and pass the resulting
/// [`Session`] to [`Self::session`] for every batch of entity operations.
#[derive(Debug, Clone)]
pub struct TaigaClient {
    http: reqwest::Client,
    api_url: String,
    read_timeout: Duration,
    write_timeout: Duration,
    page_size: u32,
}

impl TaigaClient {
    /// Create a client for the instance described by `upstream`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be built.
    pub fn new(upstream: &UpstreamConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(upstream.user_agent.clone())
            .build()?;
        Ok(Self {
            http,
            api_url: normalize_api_url(&upstream.base_url),
            read_timeout: Duration::from_secs(upstream.read_timeout_secs),
            write_timeout: Duration::from_secs(upstream.write_timeout_secs),
            page_size: DEFAULT_PAGE_SIZE,
        })
    }

    /// Create a client from the full application config.
    ///
    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub fn from_config(config: &TaigaConfig) -> Result<Self, ClientError> {
        Ok(Self::new(&config.upstream)?.with_page_size(config.pagination.page_size))
    }

    /// Override the page size used by fetch-all listing.
    #[must_use]
    pub const fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = if page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size
        };
        self
    }

    /// API root requests go to when a login names no other instance.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Bind a session for entity operations.
    ///
    /// This is the precondition check for every entity operation: it never
    /// touches the network.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotAuthenticated`] if the session carries no
    /// token or no API root.
    pub fn session<'a>(&'a self, session: &'a Session) -> Result<SessionClient<'a>, ClientError> {
        if !session.is_authenticated() || session.api_url.is_empty() {
            return Err(ClientError::NotAuthenticated);
        }
        Ok(SessionClient::new(self, session))
    }
}

/// Normalize an instance URL into an API root.
///
/// Trailing slashes are trimmed and `/api/v1` is appended when missing, so
/// `https://tree.taiga.io/`, `https://tree.taiga.io` and
/// `https://tree.taiga.io/api/v1/` all resolve to `https://tree.taiga.io/api/v1`.
#[must_use]
pub fn normalize_api_url(url: &str) -> String {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.ends_with("/api/v1") {
        trimmed.to_string()
    } else {
        format!("{trimmed}/api/v1")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use taiga_core::Identity;

    fn identity() -> Identity {
        Identity {
            id: 1,
            username: "ana".into(),
            full_name: "Ana".into(),
            email: String::new(),
        }
    }

    #[rstest]
    #[case("https://tree.taiga.io", "https://tree.taiga.io/api/v1")]
    #[case("https://tree.taiga.io/", "https://tree.taiga.io/api/v1")]
    #[case("https://tree.taiga.io/api/v1", "https://tree.taiga.io/api/v1")]
    #[case("https://tree.taiga.io/api/v1/", "https://tree.taiga.io/api/v1")]
    #[case(" http://localhost:9000 ", "http://localhost:9000/api/v1")]
    fn normalizes_instance_urls(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_api_url(input), expected);
    }

    #[test]
    fn client_from_default_config() {
        let client = TaigaClient::from_config(&TaigaConfig::default()).unwrap();
        assert_eq!(client.api_url(), "https://api.taiga.io/api/v1");
        assert_eq!(client.page_size(), 100);
    }

    #[test]
    fn zero_page_size_falls_back() {
        let client = TaigaClient::new(&UpstreamConfig::default())
            .unwrap()
            .with_page_size(0);
        assert_eq!(client.page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn session_without_token_is_rejected() {
        let client = TaigaClient::new(&UpstreamConfig::default()).unwrap();
        let session = Session::new("", identity(), "https://tree.taiga.io/api/v1");
        assert!(matches!(
            client.session(&session),
            Err(ClientError::NotAuthenticated)
        ));
    }

    #[test]
    fn session_with_token_binds() {
        let client = TaigaClient::new(&UpstreamConfig::default()).unwrap();
        let session = Session::new("tok", identity(), "https://tree.taiga.io/api/v1");
        let bound = client.session(&session).unwrap();
        assert_eq!(bound.identity().username, "ana");
    }
}
