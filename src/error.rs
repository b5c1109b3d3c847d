// src/error.rs
//! Public error types for the entire crate

use std::time::Duration;

use thiserror::Error;

use crate::core::entry::EntryId;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(&'static str),

    #[error("No catalog entry with id {0}")]
    NotFound(EntryId),

    #[error("Request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    #[error("Persistence failure: {0}")]
    Persistence(#[from] StoreError),

    #[error("Malformed JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Remote fetch failed: {0}")]
    Remote(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for CoreError {
    fn from(err: reqwest::Error) -> Self {
        CoreError::Remote(err.to_string())
    }
}

/// Failures raised by the durable key-value and secret stores
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Sql(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
