//! Integration tests for TOML and environment configuration loading.
//!
//! Uses figment::Jail for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use taiga_config::{ConfigError, TaigaConfig};

#[test]
fn loads_upstream_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[upstream]
base_url = "https://tree.taiga.io/api/v1"
read_timeout_secs = 5
write_timeout_secs = 45
user_agent = "bulk-test"
"#,
        )?;

        let config: TaigaConfig = Figment::from(Serialized::defaults(TaigaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.upstream.base_url, "https://tree.taiga.io/api/v1");
        assert_eq!(config.upstream.read_timeout_secs, 5);
        assert_eq!(config.upstream.write_timeout_secs, 45);
        assert_eq!(config.upstream.user_agent, "bulk-test");
        Ok(())
    });
}

#[test]
fn partial_section_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[pagination]
page_size = 50

[favorites]
db_path = "./favs.db"
"#,
        )?;

        let config: TaigaConfig = Figment::from(Serialized::defaults(TaigaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.pagination.page_size, 50);
        assert_eq!(config.favorites.db_path, "./favs.db");
        assert_eq!(config.upstream.write_timeout_secs, 30);
        assert!(!config.auth.is_configured());
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".taiga")?;
        jail.create_file(
            ".taiga/config.toml",
            r#"
[auth]
username = "ana"
password = "from-file"
"#,
        )?;

        let config = TaigaConfig::load().expect("config loads");
        assert_eq!(config.auth.username, "ana");
        assert_eq!(config.auth.password, "from-file");
        assert!(config.auth.is_configured());
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".taiga")?;
        jail.create_file(
            ".taiga/config.toml",
            r#"
[upstream]
base_url = "https://file.example/api/v1"
"#,
        )?;
        jail.set_env("TAIGA_UPSTREAM__BASE_URL", "https://env.example/api/v1");
        jail.set_env("TAIGA_PAGINATION__PAGE_SIZE", "25");

        let config = TaigaConfig::load().expect("config loads");
        assert_eq!(config.upstream.base_url, "https://env.example/api/v1");
        assert_eq!(config.pagination.page_size, 25);
        Ok(())
    });
}

#[test]
fn legacy_api_url_variable_sets_base_url() {
    Jail::expect_with(|jail| {
        jail.set_env("TAIGA_API_URL", "https://pista.example/api/v1");

        let config = TaigaConfig::load().expect("config loads");
        assert_eq!(config.upstream.base_url, "https://pista.example/api/v1");
        Ok(())
    });
}

#[test]
fn prefixed_variable_beats_legacy_variable() {
    Jail::expect_with(|jail| {
        jail.set_env("TAIGA_API_URL", "https://legacy.example/api/v1");
        jail.set_env("TAIGA_UPSTREAM__BASE_URL", "https://new.example/api/v1");

        let config = TaigaConfig::load().expect("config loads");
        assert_eq!(config.upstream.base_url, "https://new.example/api/v1");
        Ok(())
    });
}

#[test]
fn invalid_base_url_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("TAIGA_UPSTREAM__BASE_URL", "not a url");

        let result = TaigaConfig::load();
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        Ok(())
    });
}
