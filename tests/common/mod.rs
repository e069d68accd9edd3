//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::sync::Arc;

use parking_lot::Mutex;
use roster::model::{Department, EmployeeDraft, Position};
use roster::persist::{FileStorage, PersistenceError, Storage, DEFAULT_SLOT};
use roster::store::{AppState, Store};
use tempfile::TempDir;

/// A complete, valid form submission.
pub fn draft(first_name: &str) -> EmployeeDraft {
    EmployeeDraft {
        first_name: first_name.to_string(),
        last_name: "Doe".to_string(),
        date_of_employment: Some("2022-01-10".to_string()),
        date_of_birth: Some("1990-12-10".to_string()),
        phone_number: "5321234567".to_string(),
        email: format!("{}@example.com", first_name.to_lowercase()),
        department: Some(Department::Tech),
        position: Some(Position::Junior),
    }
}

/// Store backed by a fresh temporary directory. Keep the `TempDir` alive
/// for as long as the store is used.
pub fn temp_store() -> (TempDir, Store) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = open(&dir);
    (dir, store)
}

/// Open (or reopen) the default slot inside `dir`.
pub fn open(dir: &TempDir) -> Store {
    Store::load(
        FileStorage::new(dir.path()),
        DEFAULT_SLOT,
        AppState::default(),
    )
}

/// Storage whose writes always fail; records every attempt.
#[derive(Default)]
pub struct FailingStorage {
    pub attempts: Mutex<usize>,
}

impl Storage for FailingStorage {
    fn read(&self, _slot: &str) -> Result<Option<String>, PersistenceError> {
        Ok(None)
    }

    fn write(&self, _slot: &str, _value: &str) -> Result<(), PersistenceError> {
        *self.attempts.lock() += 1;
        Err(PersistenceError::Unavailable("quota exceeded".to_string()))
    }
}

/// Storage that records writes in order into a shared log.
pub struct RecordingStorage {
    pub log: Arc<Mutex<Vec<String>>>,
}

impl Storage for RecordingStorage {
    fn read(&self, _slot: &str) -> Result<Option<String>, PersistenceError> {
        Ok(None)
    }

    fn write(&self, _slot: &str, _value: &str) -> Result<(), PersistenceError> {
        self.log.lock().push("persist".to_string());
        Ok(())
    }
}
