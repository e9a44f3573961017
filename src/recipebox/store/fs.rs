use super::KeyValueStore;
use crate::error::{RecipeError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

const DATA_FILENAME: &str = "data.json";

/// File-backed key-value store: every slot lives in `<root>/data.json`.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn data_file(&self) -> PathBuf {
        self.root.join(DATA_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(RecipeError::Io)?;
        }
        Ok(())
    }

    fn load_slots(&self) -> Result<BTreeMap<String, String>> {
        let data_file = self.data_file();
        if !data_file.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(data_file).map_err(RecipeError::Io)?;
        let slots: BTreeMap<String, String> =
            serde_json::from_str(&content).map_err(RecipeError::Serialization)?;
        Ok(slots)
    }

    fn save_slots(&self, slots: &BTreeMap<String, String>) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(slots).map_err(RecipeError::Serialization)?;
        fs::write(self.data_file(), content).map_err(RecipeError::Io)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let slots = self.load_slots()?;
        Ok(slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        // A corrupt data file is replaced rather than blocking the write
        let mut slots = self.load_slots().unwrap_or_default();
        slots.insert(key.to_string(), value.to_string());
        self.save_slots(&slots)
    }
}
