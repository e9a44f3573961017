//! # Storage Layer
//!
//! Recipebox persists exactly one thing: the favorites set. It lives in a single
//! slot of a flat key-value store, the same shape as browser local storage.
//! The [`KeyValueStore`] trait is that shape.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage
//!   - All slots in one `data.json` object (`{"key": "value", ...}`)
//!   - A missing file reads as an empty store
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can simulate write failures
//!
//! ## Storage Layout
//!
//! ```text
//! <data-dir>/
//! ├── data.json      # Key-value slots ({"recipeFavorites": "[2,5]"})
//! └── config.json    # Configuration
//! ```
//!
//! Values are opaque strings. Interpreting them (and surviving garbage) is the
//! caller's job, see `favorites`.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for a flat string key-value store.
pub trait KeyValueStore {
    /// Read a slot. `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite a slot.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
