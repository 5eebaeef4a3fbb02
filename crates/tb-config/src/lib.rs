//! # tb-config
//!
//! Layered configuration loading for the `tb` CLI using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TYPEBOOK_*` prefix, e.g. `TYPEBOOK_URL`)
//! 2. Project-level `.typebook/config.toml`
//! 3. User-level `~/.typebook.toml`
//! 4. Built-in defaults
//!
//! Command-line flags are applied by the CLI on top of the loaded value.
//!
//! # Usage
//!
//! ```no_run
//! use tb_config::TbConfig;
//!
//! let config = TbConfig::load_with_dotenv().expect("config");
//! println!("typebook server: {}", config.url);
//! ```

mod error;

pub use error::ConfigError;

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Default server address, matching the server's default listen address.
pub const DEFAULT_URL: &str = "127.0.0.1:8888";

fn default_url() -> String {
    DEFAULT_URL.to_string()
}

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("typebook-rs/", env!("CARGO_PKG_VERSION")).to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TbConfig {
    /// Server address, either `host:port` or a full URL.
    #[serde(default = "default_url")]
    pub url: String,

    /// Per-request timeout in seconds. `0` disables the timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// `User-Agent` header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for TbConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl TbConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`TbConfig::load_with_dotenv`] if you
    /// need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or the merged
    /// values fail validation.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support from the current directory.
    ///
    /// # Errors
    ///
    /// See [`TbConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on
    /// top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".typebook/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("TYPEBOOK_").split("__"))
    }

    /// Reject values the client cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `url` is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "url".to_string(),
                reason: "server address must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Request timeout, or `None` when disabled.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        if self.timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.timeout_secs))
        }
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".typebook.toml"))
    }
}
