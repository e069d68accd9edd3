//! Persistence of store snapshots to a named key-value slot.
//!
//! - `storage.rs` - Slot backends (file directory, in-memory)
//! - `codec.rs` - Snapshot encoding and tolerant decoding

mod codec;
mod storage;

pub use codec::{decode, encode};
pub use storage::{FileStorage, MemoryStorage, Storage};

use std::path::PathBuf;

use thiserror::Error;

/// Slot name the store snapshot is written to.
pub const DEFAULT_SLOT: &str = "storeVal";

/// Failure to read or write a slot. Never fatal to the store.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Storage I/O failed for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Persisted data that could not be parsed. Discarded on load.
#[derive(Debug, Error)]
#[error("Malformed persisted state: {0}")]
pub struct MalformedPersistedState(#[from] serde_json::Error);
