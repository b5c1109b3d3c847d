// src/db/mod.rs
//! Durable storage: the catalog key-value database and the SQLCipher secret database

pub mod data_db_conn;
pub mod kv_store;
pub mod secret_store;
pub mod secure_db_conn;

pub use data_db_conn::{open_data_db, open_data_db_at};
pub use kv_store::{KeyValueStore, MemoryKvStore, SqliteKvStore};
pub use secret_store::{MemorySecretStore, SecretStore, SqliteSecretStore};
pub use secure_db_conn::{open_secure_db, open_secure_db_at};
