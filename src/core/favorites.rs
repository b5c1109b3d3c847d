// src/core/favorites.rs
use serde::{Deserialize, Serialize};

use crate::core::entry::EntryId;

/// Favorite ids in the order they were marked; persisted as a plain JSON array
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet(Vec<EntryId>);

impl FavoriteSet {
    pub fn contains(&self, id: EntryId) -> bool {
        self.0.contains(&id)
    }

    /// Flip membership of `id`; returns whether it is now a favorite
    pub fn toggle(&mut self, id: EntryId) -> bool {
        if self.remove(id) {
            false
        } else {
            self.0.push(id);
            true
        }
    }

    /// Drop `id`; returns whether it was present
    pub fn remove(&mut self, id: EntryId) -> bool {
        let before = self.0.len();
        self.0.retain(|&fav| fav != id);
        self.0.len() != before
    }

    pub fn ids(&self) -> &[EntryId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
