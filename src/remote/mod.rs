// src/remote/mod.rs
//! Remote catalog collaborator and the timeout wrapper around it
//!
//! The fetch runs on its own thread. When the bound expires the caller gets
//! `CoreError::Timeout` and the worker's eventual result is dropped on the floor;
//! the request itself is never cancelled.

mod http;

pub use http::HttpCatalogSource;

use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::core::entry::CatalogEntry;
use crate::error::CoreError;
use crate::CoreResult as Result;

/// Anything that can produce the full remote catalog in one call
pub trait CatalogSource: Send + Sync {
    fn fetch(&self) -> Result<Vec<CatalogEntry>>;
}

/// Run `source.fetch()` with an upper bound of `timeout`
pub fn fetch_with_timeout<S>(source: Arc<S>, timeout: Duration) -> Result<Vec<CatalogEntry>>
where
    S: CatalogSource + ?Sized + 'static,
{
    let (tx, rx) = mpsc::sync_channel(1);

    thread::Builder::new()
        .name("catalog-fetch".into())
        .spawn(move || {
            // Receiver may already be gone after a timeout
            let _ = tx.send(source.fetch());
        })
        .map_err(|e| CoreError::Remote(format!("cannot start fetch worker: {e}")))?;

    match rx.recv_timeout(timeout) {
        Ok(result) => result,
        Err(RecvTimeoutError::Timeout) => {
            tracing::warn!(timeout_ms = timeout.as_millis() as u64, "catalog fetch timed out");
            Err(CoreError::Timeout(timeout))
        }
        Err(RecvTimeoutError::Disconnected) => Err(CoreError::Remote(
            "fetch worker exited without a result".into(),
        )),
    }
}
