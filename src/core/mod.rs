// src/core/mod.rs
pub mod cipher;
pub mod credential;
pub mod entry;
pub mod favorites;
pub mod record_store;

pub use cipher::{decode, encode};
pub use credential::{check_password, CredentialVault};
pub use entry::{CatalogEntry, EntryId};
pub use favorites::FavoriteSet;
pub use record_store::{NameFilter, RecordStore};

pub type Result<T> = std::result::Result<T, crate::error::CoreError>;
