use anyhow::Context;
use tb_client::RegistryClient;
use tb_config::TbConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration, then apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<TbConfig> {
    let mut config = TbConfig::load_with_dotenv().context("failed to load typebook configuration")?;
    if let Some(url) = &flags.url {
        config.url.clone_from(url);
        config.validate()?;
    }
    tracing::debug!(url = %config.url, timeout_secs = config.timeout_secs, "configuration loaded");
    Ok(config)
}

/// Build the registry client described by `config`.
pub fn build_client(config: &TbConfig) -> anyhow::Result<RegistryClient> {
    let mut builder = RegistryClient::builder(&config.url).user_agent(config.user_agent.clone());
    if let Some(timeout) = config.timeout() {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(anyhow::Error::from)
        .context("failed to build typebook client")
}
