//! # prova-config
//!
//! Layered configuration loading for the prova client using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PROVA_*` prefix, `__` as separator)
//! 2. Project-level `.prova/config.toml`
//! 3. User-level `~/.config/prova/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `PROVA_API__BASE_URL` -> `api.base_url`. The `__` (double
//! underscore) separates nested config sections.

mod api;
mod error;

pub use api::ApiConfig;
pub use error::ConfigError;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProvaConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

impl ProvaConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if any source fails to merge or extract.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` before building the figment. This is the typical entry
    /// point for the CLI and tests.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if any source fails to merge or extract.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add additional
    /// providers on top.
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
        let local_path = PathBuf::from(".prova/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("PROVA_").split("__"))
    }

    /// Verify the sections required at runtime are present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotConfigured` when `api.base_url` is missing.
    pub fn ensure_configured(&self) -> Result<(), ConfigError> {
        if !self.api.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "api".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("prova").join("config.toml"))
    }
}
