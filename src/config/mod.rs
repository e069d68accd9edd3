//! Application configuration.
//!
//! Loaded from `~/.config/roster/config.toml` (platform equivalent via
//! `dirs`). Every key is optional; a missing file means defaults.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, Defaults, StorageConfig};
