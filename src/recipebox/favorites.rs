//! # Favorites Store
//!
//! The favorites set is the only mutable state that outlives a session. It is
//! stored as a JSON array of recipe ids in one key-value slot ([`FAVORITES_KEY`]).
//!
//! Losing a favorite mark is not worth interrupting the user for, so this module
//! never returns errors:
//! - An absent, unparsable, or non-integer slot loads as the empty set.
//! - A failed write is logged and dropped. The in-memory set stays the source
//!   of truth for the rest of the session.
//!
//! Ids are kept in the order they were first favorited, which is also the order
//! they are written back in.

use crate::store::KeyValueStore;
use tracing::{debug, warn};

/// Slot name holding the serialized favorites.
pub const FAVORITES_KEY: &str = "recipeFavorites";

pub struct FavoritesStore<S: KeyValueStore> {
    store: S,
    ids: Vec<u32>,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    /// Read the favorites slot. Never fails.
    pub fn load(store: S) -> Self {
        let ids = match store.get(FAVORITES_KEY) {
            Ok(Some(raw)) => parse_ids(&raw),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "could not read favorites, starting empty");
                Vec::new()
            }
        };
        debug!(count = ids.len(), "loaded favorites");
        Self { store, ids }
    }

    pub fn is_favorite(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    /// Flip membership of `id` and persist the whole set.
    ///
    /// Returns `true` if `id` is a favorite afterwards.
    pub fn toggle(&mut self, id: u32) -> bool {
        let now_favorite = if let Some(pos) = self.ids.iter().position(|f| *f == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id);
            true
        };
        debug!(id, now_favorite, "toggled favorite");
        self.save();
        now_favorite
    }

    /// Favorited ids in insertion order.
    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    fn save(&mut self) {
        let payload = match serde_json::to_string(&self.ids) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, "could not serialize favorites");
                return;
            }
        };
        if let Err(e) = self.store.set(FAVORITES_KEY, &payload) {
            warn!(error = %e, "could not persist favorites, keeping them in memory");
        }
    }
}

fn parse_ids(raw: &str) -> Vec<u32> {
    match serde_json::from_str::<Option<Vec<u32>>>(raw) {
        Ok(ids) => {
            let mut unique = Vec::new();
            for id in ids.unwrap_or_default() {
                if !unique.contains(&id) {
                    unique.push(id);
                }
            }
            unique
        }
        Err(e) => {
            warn!(error = %e, "ignoring malformed favorites slot");
            Vec::new()
        }
    }
}
