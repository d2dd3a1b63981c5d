//! Saving and loading engine snapshots.
//!
//! The binary save is the normal path. JSON export exists for backups and
//! moving a save between devices.

pub mod save_manager;
pub mod snapshot;

pub use save_manager::{SaveManager, SAVE_VERSION_MAGIC};
pub use snapshot::EngineSnapshot;

use std::io;

pub fn export_json(snapshot: &EngineSnapshot) -> io::Result<String> {
    serde_json::to_string_pretty(snapshot).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

pub fn import_json(json: &str) -> io::Result<EngineSnapshot> {
    serde_json::from_str(json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
