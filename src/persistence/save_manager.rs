use super::snapshot::EngineSnapshot;
use directories::ProjectDirs;
use log::warn;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// Save format magic: "TAPQ" followed by format version 1.
pub const SAVE_VERSION_MAGIC: u64 = 0x5441_5051_0000_0001;

/// Saves and loads the engine snapshot in a checksummed binary format
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    /// Sets up the save directory in the platform config location.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "tapquest").ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine config directory",
            )
        })?;

        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;

        Ok(Self {
            save_path: config_dir.join("save.dat"),
        })
    }

    /// Save manager writing to an explicit file.
    pub fn with_path(save_path: PathBuf) -> Self {
        Self { save_path }
    }

    pub fn save_path(&self) -> &PathBuf {
        &self.save_path
    }

    /// File format:
    /// - Version magic (8 bytes)
    /// - Data length (4 bytes)
    /// - bincode snapshot (variable length)
    /// - SHA256 over the three fields above (32 bytes)
    pub fn save(&self, snapshot: &EngineSnapshot) -> io::Result<()> {
        let data =
            bincode::serialize(snapshot).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let data_len = u32::try_from(data.len())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let mut hasher = Sha256::new();
        hasher.update(SAVE_VERSION_MAGIC.to_le_bytes());
        hasher.update(data_len.to_le_bytes());
        hasher.update(&data);
        let checksum = hasher.finalize();

        if let Some(parent) = self.save_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = fs::File::create(&self.save_path)?;
        file.write_all(&SAVE_VERSION_MAGIC.to_le_bytes())?;
        file.write_all(&data_len.to_le_bytes())?;
        file.write_all(&data)?;
        file.write_all(&checksum)?;

        Ok(())
    }

    /// Fails with `InvalidData` on a wrong magic, a checksum mismatch or an
    /// undecodable payload, and `NotFound` when there is no save.
    pub fn load(&self) -> io::Result<EngineSnapshot> {
        let mut file = fs::File::open(&self.save_path)?;

        let mut version_bytes = [0u8; 8];
        file.read_exact(&mut version_bytes)?;
        let version = u64::from_le_bytes(version_bytes);
        if version != SAVE_VERSION_MAGIC {
            warn!("rejected save with version 0x{:016X}", version);
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "Invalid save version: expected 0x{:016X}, got 0x{:016X}",
                    SAVE_VERSION_MAGIC, version
                ),
            ));
        }

        let mut length_bytes = [0u8; 4];
        file.read_exact(&mut length_bytes)?;
        let data_len = u32::from_le_bytes(length_bytes);

        let mut data = vec![0u8; data_len as usize];
        file.read_exact(&mut data)?;

        let mut stored_checksum = [0u8; 32];
        file.read_exact(&mut stored_checksum)?;

        let mut hasher = Sha256::new();
        hasher.update(version_bytes);
        hasher.update(length_bytes);
        hasher.update(&data);
        let computed_checksum = hasher.finalize();

        if stored_checksum != computed_checksum.as_slice() {
            warn!("rejected save at {}: checksum mismatch", self.save_path.display());
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "Checksum verification failed",
            ));
        }

        bincode::deserialize(&data).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }

    pub fn delete(&self) -> io::Result<()> {
        if self.save_exists() {
            fs::remove_file(&self.save_path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::EconomyConfig;
    use crate::engine::Engine;

    fn temp_manager(name: &str) -> SaveManager {
        let dir = std::env::temp_dir().join(format!(
            "tapquest-save-{}-{}",
            name,
            std::process::id()
        ));
        SaveManager::with_path(dir.join("save.dat"))
    }

    fn sample_snapshot() -> EngineSnapshot {
        let mut engine = Engine::new(EconomyConfig::default());
        engine.complete_tutorial();
        engine.snapshot(1_700_000_000)
    }

    #[test]
    fn test_save_and_load() {
        let manager = temp_manager("roundtrip");
        let original = sample_snapshot();

        manager.save(&original).expect("Failed to save snapshot");
        assert!(manager.save_exists());
        let loaded = manager.load().expect("Failed to load snapshot");
        assert_eq!(loaded, original);

        manager.delete().expect("Failed to delete save");
        assert!(!manager.save_exists());
    }

    #[test]
    fn test_load_nonexistent() {
        let manager = temp_manager("missing");
        manager.delete().expect("Failed to delete save");
        let result = manager.load();
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_corrupted_payload_is_rejected() {
        let manager = temp_manager("corrupt");
        manager.save(&sample_snapshot()).expect("Failed to save snapshot");

        let mut bytes = fs::read(manager.save_path()).expect("Failed to read save");
        bytes[14] ^= 0xFF;
        fs::write(manager.save_path(), &bytes).expect("Failed to write save");

        let result = manager.load();
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::InvalidData);
        manager.delete().expect("Failed to delete save");
    }

    #[test]
    fn test_wrong_magic_is_rejected() {
        let manager = temp_manager("magic");
        manager.save(&sample_snapshot()).expect("Failed to save snapshot");

        let mut bytes = fs::read(manager.save_path()).expect("Failed to read save");
        bytes[0] ^= 0x01;
        fs::write(manager.save_path(), &bytes).expect("Failed to write save");

        assert_eq!(
            manager.load().unwrap_err().kind(),
            io::ErrorKind::InvalidData
        );
        manager.delete().expect("Failed to delete save");
    }
}
