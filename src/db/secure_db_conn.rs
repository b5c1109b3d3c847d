// src/db/secure_db_conn.rs
use rusqlite::Connection;
use std::{env, fs, path::{Path, PathBuf}};

use crate::aliases::SecureStoreKey;
use crate::consts::DB_KDF_ITERATIONS;
use crate::error::{CoreError, StoreError};

/// Open the SQLCipher credential database named by `PDV_SECURE_DB` or the global config
pub fn open_secure_db() -> Result<Connection, CoreError> {
    let config = crate::config::load();
    let db_path = env::var("PDV_SECURE_DB")
        .map(PathBuf::from)
        .unwrap_or_else(|_| config.paths.secure_db.clone());
    let key = config.secure_key()?;
    Ok(open_secure_db_at(db_path, &key)?)
}

pub fn open_secure_db_at<P: AsRef<Path>>(
    db_path: P,
    key: &SecureStoreKey,
) -> Result<Connection, StoreError> {
    if let Some(parent) = db_path.as_ref().parent() {
        fs::create_dir_all(parent)?;
    }

    let conn = Connection::open(db_path.as_ref())?;

    conn.pragma_update(None, "key", key.expose_secret().as_str())?;

    // A wrong key surfaces here: the first schema read fails with SQLITE_NOTADB
    conn.execute_batch(&format!(
        r#"
        PRAGMA cipher_page_size = 4096;
        PRAGMA kdf_iter = {DB_KDF_ITERATIONS};
        PRAGMA cipher_hmac_algorithm = HMAC_SHA512;
        PRAGMA cipher_kdf_algorithm = PBKDF2_HMAC_SHA512;
        PRAGMA cipher_plaintext_header_size = 0;

        CREATE TABLE IF NOT EXISTS secure_items (
            key       TEXT PRIMARY KEY,
            value     TEXT NOT NULL,
            stored_at TEXT NOT NULL DEFAULT (datetime('now'))
        );
        "#
    ))?;

    Ok(conn)
}
