use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::PersistenceError;

/// A key-value slot store holding serialized snapshots.
pub trait Storage: Send + Sync {
    /// Read a slot. `Ok(None)` when the slot has never been written.
    fn read(&self, slot: &str) -> Result<Option<String>, PersistenceError>;

    /// Replace the contents of a slot.
    fn write(&self, slot: &str, value: &str) -> Result<(), PersistenceError>;
}

/// Slots stored as `<dir>/<slot>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{slot}.json"))
    }
}

impl Storage for FileStorage {
    fn read(&self, slot: &str) -> Result<Option<String>, PersistenceError> {
        let path = self.slot_path(slot);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(PersistenceError::Io { path, source }),
        }
    }

    /// Writes to a sibling temp file and renames it over the slot so a
    /// crash mid-write never leaves a truncated snapshot behind.
    fn write(&self, slot: &str, value: &str) -> Result<(), PersistenceError> {
        fs::create_dir_all(&self.dir).map_err(|source| PersistenceError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.slot_path(slot);
        let tmp = self.dir.join(format!("{slot}.json.tmp"));
        fs::write(&tmp, value).map_err(|source| PersistenceError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| PersistenceError::Io { path, source })
    }
}

/// Process-local slots. Useful for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a slot, e.g. with a snapshot from an earlier session.
    pub fn with_slot(self, slot: &str, value: impl Into<String>) -> Self {
        self.slots.lock().insert(slot.to_string(), value.into());
        self
    }
}

impl Storage for MemoryStorage {
    fn read(&self, slot: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.slots.lock().get(slot).cloned())
    }

    fn write(&self, slot: &str, value: &str) -> Result<(), PersistenceError> {
        self.slots.lock().insert(slot.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: Storage + ?Sized> Storage for std::sync::Arc<S> {
    fn read(&self, slot: &str) -> Result<Option<String>, PersistenceError> {
        (**self).read(slot)
    }

    fn write(&self, slot: &str, value: &str) -> Result<(), PersistenceError> {
        (**self).write(slot, value)
    }
}
