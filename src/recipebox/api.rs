//! # API Facade
//!
//! [`RecipeApi`] is the display controller and the single entry point for any
//! UI. It owns the catalog, the favorites store, the control state, and the
//! search debouncer, and it keeps the most recent pipeline output.
//!
//! ## State Machine
//!
//! Three independent axes feed one derived output:
//!
//! | Action              | Effect                                   | Recompute        |
//! |---------------------|------------------------------------------|------------------|
//! | `set_filter`        | filter axis                              | immediate        |
//! | `set_sort`          | sort axis                                | immediate        |
//! | `set_search_text`   | schedules the search axis                | after the window |
//! | `clear_search`      | drops pending text, search axis to `""`  | immediate        |
//! | `toggle_favorite`   | favorites set (persisted)                | immediate        |
//!
//! Every recompute runs the whole pipeline over the whole catalog; nothing is
//! patched incrementally.
//!
//! ## Time
//!
//! Debounced search needs a clock. Callers pass `Instant`s into
//! [`RecipeApi::set_search_text`] and [`RecipeApi::tick`]; an event loop ticks
//! on every iteration, a one-shot client calls [`RecipeApi::flush_search`].
//!
//! ## Generic Over KeyValueStore
//!
//! - Production: `RecipeApi<FileStore>`
//! - Testing: `RecipeApi<InMemoryStore>`

use crate::catalog::Catalog;
use crate::commands::{self, CmdResult, ControlState, FilterKey, SortKey};
use crate::debounce::Debouncer;
use crate::error::{RecipeError, Result};
use crate::favorites::FavoritesStore;
use crate::model::{Counts, DisplayRecipe, Recipe};
use crate::store::KeyValueStore;
use std::time::Instant;
use tracing::debug;

pub struct RecipeApi<S: KeyValueStore> {
    catalog: Catalog,
    favorites: FavoritesStore<S>,
    state: ControlState,
    pending_search: Debouncer<String>,
    current: CmdResult,
}

impl<S: KeyValueStore> RecipeApi<S> {
    /// Load favorites from `store` and compute the initial listing.
    pub fn new(catalog: Catalog, store: S) -> Self {
        Self::with_state(catalog, store, ControlState::default())
    }

    pub fn with_state(catalog: Catalog, store: S, state: ControlState) -> Self {
        let mut api = Self {
            catalog,
            favorites: FavoritesStore::load(store),
            state,
            pending_search: Debouncer::default(),
            current: CmdResult::default(),
        };
        api.recompute();
        api
    }

    pub fn set_filter(&mut self, key: FilterKey) {
        self.state.filter = key;
        self.recompute();
    }

    pub fn set_sort(&mut self, key: SortKey) {
        self.state.sort = key;
        self.recompute();
    }

    /// Schedule `text` as the new search, replacing any pending one.
    pub fn set_search_text(&mut self, text: impl Into<String>, now: Instant) {
        self.pending_search.schedule(text.into(), now);
    }

    /// Apply a pending search whose window has elapsed at `now`.
    ///
    /// Returns `true` if the listing was recomputed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.pending_search.poll(now) {
            Some(text) => {
                self.apply_search(text);
                true
            }
            None => false,
        }
    }

    /// Apply a pending search right away. Returns `true` if there was one.
    pub fn flush_search(&mut self) -> bool {
        match self.pending_search.flush() {
            Some(text) => {
                self.apply_search(text);
                true
            }
            None => false,
        }
    }

    pub fn clear_search(&mut self) {
        self.pending_search.cancel();
        self.state.search.clear();
        self.recompute();
    }

    pub fn toggle_favorite(&mut self, id: u32) -> CmdResult {
        let result = commands::favorite::toggle(&mut self.favorites, &self.catalog, id);
        self.recompute();
        result
    }

    pub fn recompute(&mut self) {
        self.current = commands::list::run(&self.catalog, &self.state, self.favorites.ids());
        debug!(
            filter = %self.state.filter,
            sort = %self.state.sort,
            search = %self.state.search,
            shown = self.current.counts.shown,
            total = self.current.counts.total,
            "recomputed listing"
        );
    }

    pub fn visible_recipes(&self) -> &[DisplayRecipe] {
        &self.current.listed_recipes
    }

    pub fn counts(&self) -> Counts {
        self.current.counts
    }

    /// The latest listing, for clients that render a `CmdResult` directly.
    pub fn listing(&self) -> &CmdResult {
        &self.current
    }

    pub fn control_state(&self) -> &ControlState {
        &self.state
    }

    pub fn has_pending_search(&self) -> bool {
        self.pending_search.is_pending()
    }

    pub fn is_favorite(&self, id: u32) -> bool {
        self.favorites.is_favorite(id)
    }

    pub fn favorites(&self) -> &FavoritesStore<S> {
        &self.favorites
    }

    pub fn recipe(&self, id: u32) -> Result<&Recipe> {
        self.catalog.get(id).ok_or(RecipeError::RecipeNotFound(id))
    }

    fn apply_search(&mut self, text: String) {
        self.state.search = text;
        self.recompute();
    }
}
