//! Client configuration loaded from the process environment.
use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use game_content::{CatalogLoader, ConfigLoader};
use game_core::Catalog;
use runtime::RuntimeConfig;

/// Configuration required to bootstrap the runtime and the terminal client.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    /// Fixed RNG seed, for reproducible games.
    pub seed: Option<u64>,
    /// RON catalog replacing the standard one.
    pub catalog_path: Option<PathBuf>,
    /// TOML file with rule constants.
    pub game_config_path: Option<PathBuf>,
    /// Let the bot play instead of reading stdin.
    pub autoplay: bool,
    pub log_dir: Option<PathBuf>,
    pub session_id: Option<String>,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `GAME_SEED` - RNG seed (default: random per game)
    /// - `CATALOG_PATH` - RON catalog file (default: standard catalog)
    /// - `GAME_CONFIG_PATH` - TOML rule constants (default: standard rules)
    /// - `AUTOPLAY` - Let the bot play (default: false)
    /// - `LOG_DIR` - Log directory (default: platform cache directory)
    /// - `GAME_SESSION_ID` - Log sub-directory name (default: timestamp)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut config = Self {
            seed: read("GAME_SEED").and_then(|v| v.trim().parse().ok()),
            catalog_path: read("CATALOG_PATH").map(PathBuf::from),
            game_config_path: read("GAME_CONFIG_PATH").map(PathBuf::from),
            log_dir: read("LOG_DIR").map(PathBuf::from),
            session_id: read("GAME_SESSION_ID"),
            ..Self::default()
        };

        if let Some(value) = lookup("AUTOPLAY") {
            // A bare `AUTOPLAY=` also counts as enabled.
            config.autoplay = value.trim().parse().unwrap_or(value.trim().is_empty());
        }

        config
    }

    pub fn runtime_config(&self) -> Result<RuntimeConfig> {
        let mut config = RuntimeConfig {
            seed: self.seed,
            ..RuntimeConfig::default()
        };
        if let Some(path) = &self.game_config_path {
            config.game_config = ConfigLoader::load(path)
                .with_context(|| format!("loading rule constants from {}", path.display()))?;
        }
        Ok(config)
    }

    pub fn load_catalog(&self) -> Result<Option<Catalog>> {
        self.catalog_path
            .as_ref()
            .map(|path| {
                CatalogLoader::load(path)
                    .with_context(|| format!("loading catalog from {}", path.display()))
            })
            .transpose()
    }
}
