use crate::commands::{ControlState, FilterKey, SortKey};
use crate::error::{RecipeError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for recipebox, stored in `<data-dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipeConfig {
    /// Catalog JSON file to use instead of the built-in catalog.
    /// Relative paths are taken from the config directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_file: Option<PathBuf>,

    /// Filter active at startup (unknown values mean "all")
    #[serde(default = "default_filter")]
    pub default_filter: String,

    /// Sort active at startup (unknown values mean "none")
    #[serde(default = "default_sort")]
    pub default_sort: String,
}

fn default_filter() -> String {
    FilterKey::default().to_string()
}

fn default_sort() -> String {
    SortKey::default().to_string()
}

impl Default for RecipeConfig {
    fn default() -> Self {
        Self {
            catalog_file: None,
            default_filter: default_filter(),
            default_sort: default_sort(),
        }
    }
}

impl RecipeConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RecipeError::Io)?;
        let config: RecipeConfig =
            serde_json::from_str(&content).map_err(RecipeError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RecipeError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RecipeError::Serialization)?;
        fs::write(config_path, content).map_err(RecipeError::Io)?;
        Ok(())
    }

    /// The configured catalog file, with relative paths joined onto `config_dir`.
    pub fn catalog_path<P: AsRef<Path>>(&self, config_dir: P) -> Option<PathBuf> {
        self.catalog_file
            .as_ref()
            .map(|file| config_dir.as_ref().join(file))
    }

    /// Control state to start a session with.
    pub fn initial_state(&self) -> ControlState {
        ControlState {
            filter: FilterKey::parse_lenient(&self.default_filter),
            sort: SortKey::parse_lenient(&self.default_sort),
            search: String::new(),
        }
    }
}
