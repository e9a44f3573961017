use super::KeyValueStore;
use crate::error::{RecipeError, Result};
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    slots: HashMap<String, String>,
    writes: usize,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a slot without counting it as a write.
    pub fn with_slot(mut self, key: &str, value: &str) -> Self {
        self.slots.insert(key.to_string(), value.to_string());
        self
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    /// Number of successful `set` calls so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.simulate_write_error {
            return Err(RecipeError::Store("Simulated write error".to_string()));
        }
        self.slots.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_none() {
        let store = InMemoryStore::new();
        assert_eq!(store.get("nope").unwrap(), None);
    }

    #[test]
    fn set_overwrites_and_counts() {
        let mut store = InMemoryStore::new().with_slot("k", "seed");
        store.set("k", "v1").unwrap();
        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));
        assert_eq!(store.writes(), 2);
    }

    #[test]
    fn simulated_write_error_leaves_slot_untouched() {
        let mut store = InMemoryStore::new().with_slot("k", "seed");
        store.set_simulate_write_error(true);
        assert!(store.set("k", "v").is_err());
        assert_eq!(store.get("k").unwrap().as_deref(), Some("seed"));
        assert_eq!(store.writes(), 0);
    }
}
