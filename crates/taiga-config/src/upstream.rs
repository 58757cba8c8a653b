//! Upstream Taiga instance configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Public Taiga cloud API root.
pub const DEFAULT_BASE_URL: &str = "https://api.taiga.io/api/v1";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_read_timeout_secs() -> u64 {
    10
}

/// Writes (task creation, update, delete) get a longer budget than reads.
const fn default_write_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    "taiga-bulk/0.1".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// API root of the Taiga instance, with or without the `/api/v1` suffix.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout for reads, in seconds.
    #[serde(default = "default_read_timeout_secs")]
    pub read_timeout_secs: u64,

    /// Per-request timeout for writes, in seconds.
    #[serde(default = "default_write_timeout_secs")]
    pub write_timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            read_timeout_secs: default_read_timeout_secs(),
            write_timeout_secs: default_write_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl UpstreamConfig {
    /// Check that the base URL looks like an HTTP(S) URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the URL is empty or has no
    /// `http://`/`https://` scheme.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.base_url.trim();
        if url.is_empty() || !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "upstream.base_url".into(),
                reason: format!("expected an http(s) URL, got '{}'", self.base_url),
            });
        }
        if self.read_timeout_secs == 0 || self.write_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "upstream timeouts".into(),
                reason: "timeouts must be at least one second".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = UpstreamConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.read_timeout_secs, 10);
        assert_eq!(config.write_timeout_secs, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_url_without_scheme() {
        let config = UpstreamConfig {
            base_url: "tree.taiga.io".into(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn rejects_zero_timeout() {
        let config = UpstreamConfig {
            write_timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
