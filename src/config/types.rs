use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::model::{Language, Pagination, ViewMode, DEFAULT_ITEMS_PER_PAGE};
use crate::persist::DEFAULT_SLOT;
use crate::store::AppState;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub defaults: Defaults,
}

/// Where the store snapshot lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding slot files (default: platform data dir + `roster`).
    #[serde(default = "default_storage_dir")]
    pub dir: PathBuf,
    /// Slot name of the store snapshot (default: `storeVal`).
    #[serde(default = "default_slot")]
    pub slot: String,
}

/// Initial state used when nothing has been persisted yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Page size (default: 10).
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
    /// UI language (default: `en`).
    #[serde(default)]
    pub language: Language,
    /// List layout (default: `table`).
    #[serde(default)]
    pub view: ViewMode,
}

fn default_storage_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("roster")
}

fn default_slot() -> String {
    DEFAULT_SLOT.to_string()
}

fn default_items_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
            slot: default_slot(),
        }
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            items_per_page: default_items_per_page(),
            language: Language::default(),
            view: ViewMode::default(),
        }
    }
}

impl Defaults {
    /// Fresh store state seeded from these defaults.
    pub fn initial_state(&self) -> AppState {
        AppState {
            pagination: Pagination::with_items_per_page(self.items_per_page),
            language: self.language,
            view: self.view,
            ..AppState::default()
        }
    }
}
