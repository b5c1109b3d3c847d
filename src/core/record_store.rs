// src/core/record_store.rs
//! In-memory catalog + favorite set, written through to a durable key-value store
//!
//! In-memory state is authoritative for the session. Every mutation is applied
//! first and persisted second; a failed write is reported to the caller but the
//! in-memory change stays (last writer wins on the next successful persist).
//!
//! Mutations take `&mut self`. Share a store between callers by wrapping it in a
//! `Mutex`, which keeps id assignment and write-through serialized.

use std::collections::HashSet;
use std::slice;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::consts::{CATALOG_KEY, DEFAULT_TYPES, FAVORITES_KEY, TYPES_KEY};
use crate::core::entry::{CatalogEntry, EntryId};
use crate::core::favorites::FavoriteSet;
use crate::db::KeyValueStore;
use crate::enums::FavoritePolicy;
use crate::error::CoreError;
use crate::remote::{fetch_with_timeout, CatalogSource};
use crate::CoreResult as Result;

pub struct RecordStore<S: KeyValueStore> {
    store: S,
    catalog: Vec<CatalogEntry>,
    favorites: FavoriteSet,
    policy: FavoritePolicy,
}

impl<S: KeyValueStore> RecordStore<S> {
    /// Load catalog and favorites; anything absent or unreadable starts empty
    pub fn open(store: S) -> Self {
        let catalog: Vec<CatalogEntry> = load_or_default(&store, CATALOG_KEY);
        let favorites: FavoriteSet = load_or_default(&store, FAVORITES_KEY);
        debug!(
            entries = catalog.len(),
            favorites = favorites.len(),
            "record store loaded"
        );
        Self {
            store,
            catalog,
            favorites,
            policy: FavoritePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: FavoritePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> FavoritePolicy {
        self.policy
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.catalog
    }

    pub fn get(&self, id: EntryId) -> Option<&CatalogEntry> {
        self.catalog.iter().find(|e| e.id == id)
    }

    pub fn favorites(&self) -> &[EntryId] {
        self.favorites.ids()
    }

    pub fn is_favorite(&self, id: EntryId) -> bool {
        self.favorites.contains(id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Overwrite the whole catalog, e.g. after a bulk remote fetch
    pub fn replace_all(&mut self, entries: Vec<CatalogEntry>) -> Result<()> {
        self.catalog = entries;
        self.persist_catalog()
    }

    /// Fetch from `source` within `timeout`, then [`replace_all`](Self::replace_all)
    ///
    /// A failed or timed-out fetch leaves memory and storage untouched.
    pub fn refresh<C>(&mut self, source: Arc<C>, timeout: Duration) -> Result<usize>
    where
        C: CatalogSource + ?Sized + 'static,
    {
        let entries = fetch_with_timeout(source, timeout)?;
        let count = entries.len();
        self.replace_all(entries)?;
        info!(count, "catalog refreshed from remote");
        Ok(count)
    }

    /// Append a new entry with the next free id and the placeholder image
    pub fn create(&mut self, name: &str, types: Vec<String>) -> Result<&CatalogEntry> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::InvalidInput("name must not be empty"));
        }
        if types.is_empty() {
            return Err(CoreError::InvalidInput("at least one type is required"));
        }

        let id = self.next_id()?;
        self.catalog.push(CatalogEntry::new(id, name, types));
        self.persist_catalog()?;
        Ok(&self.catalog[self.catalog.len() - 1])
    }

    /// Replace the display name of one entry; every other field is kept
    pub fn rename(&mut self, id: EntryId, new_name: &str) -> Result<()> {
        let entry = self
            .catalog
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(CoreError::NotFound(id))?;

        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(CoreError::InvalidInput("name must not be empty"));
        }

        entry.display_name = new_name.to_string();
        self.persist_catalog()
    }

    /// Remove the entry with `id`; returns whether anything was removed
    pub fn remove(&mut self, id: EntryId) -> Result<bool> {
        let Some(pos) = self.catalog.iter().position(|e| e.id == id) else {
            return Ok(false);
        };
        self.catalog.remove(pos);

        let pruned = self.policy == FavoritePolicy::PruneOnDelete && self.favorites.remove(id);

        // Attempt both writes, report the first failure
        let catalog_saved = self.persist_catalog();
        let favorites_saved = if pruned {
            self.persist_favorites()
        } else {
            Ok(())
        };
        catalog_saved.and(favorites_saved).map(|()| true)
    }

    /// Flip favorite membership of `id`; returns whether it is now a favorite
    ///
    /// The id is not checked against the catalog.
    pub fn toggle_favorite(&mut self, id: EntryId) -> Result<bool> {
        let now_favorite = self.favorites.toggle(id);
        self.persist_favorites()?;
        Ok(now_favorite)
    }

    /// Case-insensitive substring search over display names
    ///
    /// A blank query matches everything. The iterator is lazy and can be cloned to restart.
    pub fn filter_by_name(&self, query: &str) -> NameFilter<'_> {
        let needle = query.trim();
        NameFilter {
            inner: self.catalog.iter(),
            needle: (!needle.is_empty()).then(|| query.to_lowercase()),
        }
    }

    /// Catalog entries that are favorites, in catalog order, one per id
    pub fn favorites_view(&self) -> Vec<&CatalogEntry> {
        let mut seen = HashSet::new();
        self.catalog
            .iter()
            .filter(|e| self.favorites.contains(e.id) && seen.insert(e.id))
            .collect()
    }

    /// Type tags offered when creating an entry
    pub fn available_types(&self) -> Vec<String> {
        let stored: Option<Vec<String>> = load_or_default(&self.store, TYPES_KEY);
        stored.unwrap_or_else(|| DEFAULT_TYPES.iter().map(|t| t.to_string()).collect())
    }

    pub fn set_available_types(&mut self, types: &[String]) -> Result<()> {
        save_json(&mut self.store, TYPES_KEY, &types)
    }

    fn next_id(&self) -> Result<EntryId> {
        self.catalog
            .iter()
            .map(|e| e.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or(CoreError::InvalidInput("no id left above the highest catalog id"))
    }

    fn persist_catalog(&mut self) -> Result<()> {
        save_json(&mut self.store, CATALOG_KEY, &self.catalog)
    }

    fn persist_favorites(&mut self) -> Result<()> {
        save_json(&mut self.store, FAVORITES_KEY, &self.favorites)
    }
}

/// Lazy result of [`RecordStore::filter_by_name`]
#[derive(Debug, Clone)]
pub struct NameFilter<'a> {
    inner: slice::Iter<'a, CatalogEntry>,
    needle: Option<String>,
}

impl<'a> Iterator for NameFilter<'a> {
    type Item = &'a CatalogEntry;

    fn next(&mut self) -> Option<Self::Item> {
        match &self.needle {
            None => self.inner.next(),
            Some(needle) => self.inner.by_ref().find(|e| e.name_contains(needle)),
        }
    }
}

fn load_or_default<S, T>(store: &S, key: &str) -> T
where
    S: KeyValueStore,
    T: DeserializeOwned + Default,
{
    match store.get(key) {
        Ok(None) => T::default(),
        Ok(Some(bytes)) => serde_json::from_slice(&bytes).unwrap_or_else(|err| {
            warn!(key, %err, "stored JSON is malformed, starting empty");
            T::default()
        }),
        Err(err) => {
            warn!(key, %err, "could not read from store, starting empty");
            T::default()
        }
    }
}

fn save_json<S, T>(store: &mut S, key: &str, value: &T) -> Result<()>
where
    S: KeyValueStore,
    T: Serialize + ?Sized,
{
    let bytes = serde_json::to_vec(value)?;
    store.set(key, &bytes)?;
    debug!(key, bytes = bytes.len(), "persisted");
    Ok(())
}
