// src/config/defaults.rs
use std::path::PathBuf;

use crate::config::app::{Features, Keys, Paths, Remote};
use crate::consts::{DEFAULT_ENDPOINT, DEFAULT_FETCH_TIMEOUT_MS};
use crate::enums::FavoritePolicy;

pub const DEFAULT_CONFIG_FILE: &str = "pokedex-config.toml";
pub const DEFAULT_SECURE_KEY: &str = "dev-secure-store-password-2025";

fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pokedex-vault")
}

pub fn default_paths() -> Paths {
    let dir = data_dir();
    Paths {
        data_db: dir.join("data.db"),
        secure_db: dir.join("secure.db"),
    }
}

pub fn default_keys() -> Keys {
    Keys {
        secure_key: DEFAULT_SECURE_KEY.into(),
    }
}

pub fn default_remote() -> Remote {
    Remote {
        endpoint: DEFAULT_ENDPOINT.into(),
        timeout_ms: DEFAULT_FETCH_TIMEOUT_MS,
    }
}

pub fn default_features() -> Features {
    Features {
        use_dev_keys: true,
        favorite_policy: FavoritePolicy::default(),
    }
}
