// src/lib.rs
//! pokedex-vault — offline-first creature catalog with a gated login
//!
//! Features:
//! - Record store: catalog + favorites written through to SQLite
//! - Remote refresh with a hard timeout
//! - Credential kept cipher-encoded in a SQLCipher database
//! - Cleartext secrets wrapped in secure-gate aliases

pub mod aliases;
pub mod config;
pub mod consts;
pub mod core;
pub mod db;
pub mod enums;
pub mod error;
pub mod remote;

// Re-export everything users need at the crate root
pub use aliases::Password;
pub use config::load as load_config;
pub use crate::core::{
    check_password, decode, encode, CatalogEntry, CredentialVault, EntryId, RecordStore,
    Result as CoreResult,
};
pub use db::{KeyValueStore, MemoryKvStore, MemorySecretStore, SecretStore};
pub use enums::{FavoritePolicy, PasswordStatus};
pub use error::{CoreError, StoreError};
pub use remote::{fetch_with_timeout, CatalogSource, HttpCatalogSource};
