//! # taiga-config
//!
//! Layered configuration loading using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TAIGA_*` prefix, `__` as separator)
//! 2. The legacy `TAIGA_API_URL` variable (maps to `upstream.base_url`)
//! 3. Project-level `.taiga/config.toml`
//! 4. User-level `~/.config/taiga-bulk/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TAIGA_UPSTREAM__BASE_URL` -> `upstream.base_url`,
//! `TAIGA_AUTH__PASSWORD` -> `auth.password`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use taiga_config::TaigaConfig;
//!
//! let config = TaigaConfig::load_with_dotenv().expect("config");
//! println!("Taiga API: {}", config.upstream.base_url);
//! ```

mod auth;
mod error;
mod favorites;
mod pagination;
mod upstream;

pub use auth::AuthConfig;
pub use error::ConfigError;
pub use favorites::FavoritesConfig;
pub use pagination::PaginationConfig;
pub use upstream::{DEFAULT_BASE_URL, UpstreamConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Pre-`TAIGA_*` variable name kept for existing deployments.
const LEGACY_API_URL_VAR: &str = "TAIGA_API_URL";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TaigaConfig {
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub favorites: FavoritesConfig,
}

impl TaigaConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed, or
    /// [`ConfigError::InvalidValue`] if the upstream section is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.upstream.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".taiga/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment = figment.merge(
            Env::raw()
                .only(&[LEGACY_API_URL_VAR])
                .map(|_| "upstream.base_url".into()),
        );

        figment.merge(Env::prefixed("TAIGA_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("taiga-bulk").join("config.toml"))
    }

    /// Load `.env` from the workspace root, then the current directory.
    ///
    /// Silently does nothing if no `.env` is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = TaigaConfig::default();
        assert!(!config.auth.is_configured());
        assert_eq!(config.upstream.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.pagination.page_size, 100);
        assert!(config.favorites.db_path.is_empty());
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config = TaigaConfig::from_figment(&TaigaConfig::figment())
                .expect("should extract defaults");
            assert_eq!(config.upstream.write_timeout_secs, 30);
            assert_eq!(config.pagination.page_size, 100);
            Ok(())
        });
    }
}
