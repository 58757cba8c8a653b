use taiga_config::TaigaConfig;

/// Warn about env vars that look like config keys but were not picked up.
pub fn warn_unconfigured(config: &TaigaConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &TaigaConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let mut warnings = Vec::new();

    if !config.auth.is_configured() && has_single_underscore_key(&env_keys, "TAIGA_AUTH") {
        warnings.push(
            "Auth config appears default while TAIGA_AUTH* env vars exist. Use double underscores (example: TAIGA_AUTH__USERNAME)."
                .to_string(),
        );
    }

    if config.favorites.db_path.is_empty() && has_single_underscore_key(&env_keys, "TAIGA_FAVORITES")
    {
        warnings.push(
            "Favorites config appears default while TAIGA_FAVORITES* env vars exist. Use double underscores (example: TAIGA_FAVORITES__DB_PATH)."
                .to_string(),
        );
    }

    warnings
}

fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('_') && !rest.starts_with("__"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(keys: &[&str]) -> Vec<(String, String)> {
        keys.iter().map(|k| ((*k).to_string(), "x".to_string())).collect()
    }

    #[test]
    fn warns_on_single_underscore_auth_vars() {
        let warnings =
            collect_unconfigured_warnings(&TaigaConfig::default(), env(&["TAIGA_AUTH_USERNAME"]));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("TAIGA_AUTH__USERNAME"));
    }

    #[test]
    fn silent_for_correct_keys() {
        let warnings = collect_unconfigured_warnings(
            &TaigaConfig::default(),
            env(&["TAIGA_AUTH__USERNAME", "TAIGA_API_URL", "PATH"]),
        );
        assert!(warnings.is_empty());
    }
}
