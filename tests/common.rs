// tests/common.rs
//! Shared test utilities — logging setup, a failing store, a one-shot HTTP stub

#![allow(dead_code)] // each test crate uses a different subset

use std::cell::Cell;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use pokedex_vault::{CatalogEntry, KeyValueStore, MemoryKvStore, StoreError};

#[cfg(feature = "logging")]
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize test-friendly logging; safe to call from every test
pub fn setup() {
    #[cfg(feature = "logging")]
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok();
}

pub fn types(tags: &[&str]) -> Vec<String> {
    tags.iter().map(|t| t.to_string()).collect()
}

pub fn ids<'a>(entries: impl IntoIterator<Item = &'a CatalogEntry>) -> Vec<u64> {
    entries.into_iter().map(|e| e.id).collect()
}

/// In-memory store whose reads and writes can be made to fail from the outside
#[derive(Clone, Default)]
pub struct FlakyStore {
    pub inner: MemoryKvStore,
    pub fail_reads: Rc<Cell<bool>>,
    pub fail_writes: Rc<Cell<bool>>,
    /// Refuse writes to this one key only
    pub refused_key: Rc<Cell<Option<&'static str>>>,
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        if self.fail_reads.get() {
            return Err(StoreError::Unavailable(format!("read of {key} refused")));
        }
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        if self.fail_writes.get() || self.refused_key.get() == Some(key) {
            return Err(StoreError::Unavailable(format!("write of {key} refused")));
        }
        self.inner.set(key, value)
    }
}

/// Serve exactly one HTTP response after `delay`; returns the URL to hit
pub fn serve_once(status: &str, body: &str, delay: Duration) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
    let addr = listener.local_addr().expect("stub addr");
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    thread::spawn(move || {
        let Ok((mut stream, _)) = listener.accept() else {
            return;
        };
        let mut buf = [0u8; 4096];
        let mut request = Vec::new();
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            match stream.read(&mut buf) {
                Ok(0) | Err(_) => break,
                Ok(n) => request.extend_from_slice(&buf[..n]),
            }
        }
        thread::sleep(delay);
        let _ = stream.write_all(response.as_bytes());
        let _ = stream.flush();
    });

    format!("http://{addr}/pokemon")
}
