// src/config/app.rs
use super::defaults::*;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

use crate::aliases::SecureStoreKey;
use crate::enums::FavoritePolicy;
use crate::error::CoreError;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_paths")]
    pub paths: Paths,
    #[serde(default = "default_keys")]
    pub keys: Keys,
    #[serde(default = "default_remote")]
    pub remote: Remote,
    #[serde(default = "default_features")]
    pub features: Features,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Paths {
    pub data_db: PathBuf,
    pub secure_db: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Keys {
    pub secure_key: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Remote {
    pub endpoint: String,
    pub timeout_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Features {
    pub use_dev_keys: bool,
    pub favorite_policy: FavoritePolicy,
}

// Fields missing inside a section fall back one by one
impl Default for Paths {
    fn default() -> Self {
        default_paths()
    }
}

impl Default for Keys {
    fn default() -> Self {
        default_keys()
    }
}

impl Default for Remote {
    fn default() -> Self {
        default_remote()
    }
}

impl Default for Features {
    fn default() -> Self {
        default_features()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            paths: default_paths(),
            keys: default_keys(),
            remote: default_remote(),
            features: default_features(),
        }
    }
}

impl Config {
    /// Parse an explicit TOML file; missing sections take built-in defaults
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CoreError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            CoreError::Config(format!("cannot read {}: {e}", path.as_ref().display()))
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, CoreError> {
        toml::from_str(content).map_err(|e| CoreError::Config(e.to_string()))
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.remote.timeout_ms)
    }

    /// Key for the SQLCipher database: config value in dev mode, `PDV_SECURE_KEY` otherwise
    pub fn secure_key(&self) -> Result<SecureStoreKey, CoreError> {
        if self.features.use_dev_keys {
            return Ok(SecureStoreKey::new(self.keys.secure_key.clone()));
        }
        std::env::var("PDV_SECURE_KEY")
            .map(SecureStoreKey::new)
            .map_err(|_| CoreError::Config("PDV_SECURE_KEY required".into()))
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Global config — loaded once, falls back to defaults if missing or invalid
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path =
            std::env::var("PDV_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

        if !Path::new(&config_path).exists() {
            tracing::debug!(path = %config_path, "config file not found, using built-in defaults");
            return Config::default();
        }

        Config::from_path(&config_path).unwrap_or_else(|err| {
            tracing::warn!(path = %config_path, %err, "ignoring invalid config file");
            Config::default()
        })
    })
}
