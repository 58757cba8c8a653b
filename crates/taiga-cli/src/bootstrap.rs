use anyhow::Context;
use taiga_config::TaigaConfig;

/// Load `.env`, then the layered config.
pub fn load_config() -> anyhow::Result<TaigaConfig> {
    TaigaConfig::load_with_dotenv().context("failed to load taiga-bulk configuration")
}
