// src/db/data_db_conn.rs
use rusqlite::Connection;
use std::{env, fs, path::{Path, PathBuf}};

use crate::error::StoreError;

/// Open the catalog database named by `PDV_DATA_DB` or the global config
pub fn open_data_db() -> Result<Connection, StoreError> {
    let config = crate::config::load();
    let db_path = env::var("PDV_DATA_DB")
        .map(PathBuf::from)
        .unwrap_or_else(|_| config.paths.data_db.clone());
    open_data_db_at(db_path)
}

pub fn open_data_db_at<P: AsRef<Path>>(db_path: P) -> Result<Connection, StoreError> {
    if let Some(parent) = db_path.as_ref().parent() {
        fs::create_dir_all(parent)?;
    }

    let conn = Connection::open(db_path.as_ref())?;

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key        TEXT PRIMARY KEY,
            value      BLOB NOT NULL,
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );
        "#,
    )?;

    Ok(conn)
}
