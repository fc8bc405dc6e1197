//! Equip-state persistence - injected key-value store abstraction

use crate::loadout::Loadout;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Persistence error
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to access store: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to encode/decode loadout blob: {0}")]
    BlobError(#[from] serde_json::Error),
}

/// Key-value persistence for loadout snapshots
///
/// The engine defines only the blob shape (the serde form of
/// [`Loadout`]: category key -> item metadata); where the blob lives
/// is the implementor's business. Keys identify a session or user.
pub trait LoadoutStore {
    /// Read the snapshot stored under `key`, if any
    fn load(&self, key: &str) -> Result<Option<Loadout>, StoreError>;

    /// Write a snapshot under `key`, replacing any prior one
    fn save(&mut self, key: &str, loadout: &Loadout) -> Result<(), StoreError>;
}

/// In-memory store for tests and single-process sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl LoadoutStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<Loadout>, StoreError> {
        match self.blobs.get(key) {
            Some(blob) => Ok(Some(serde_json::from_str(blob)?)),
            None => Ok(None),
        }
    }

    fn save(&mut self, key: &str, loadout: &Loadout) -> Result<(), StoreError> {
        let blob = serde_json::to_string(loadout)?;
        self.blobs.insert(key.to_string(), blob);
        Ok(())
    }
}

/// File-backed store writing one `<key>.json` per session under a
/// directory
#[derive(Debug)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        JsonFileStore { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl LoadoutStore for JsonFileStore {
    fn load(&self, key: &str) -> Result<Option<Loadout>, StoreError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let blob = fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&blob)?))
    }

    fn save(&mut self, key: &str, loadout: &Loadout) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let blob = serde_json::to_string_pretty(loadout)?;
        fs::write(self.path_for(key), blob)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Attribute, ItemCard};

    fn hat() -> ItemCard {
        ItemCard {
            token_id: "7".to_string(),
            name: "Dusty Hat".to_string(),
            image: None,
            rarity: None,
            attributes: vec![Attribute::new("Type", "Hat")],
        }
    }

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        let loadout = Loadout::new().equip(&hat());

        store.save("session-1", &loadout).unwrap();
        let restored = store.load("session-1").unwrap().unwrap();
        assert_eq!(restored, loadout);
    }

    #[test]
    fn test_memory_store_missing_key() {
        let store = MemoryStore::new();
        assert!(store.load("nope").unwrap().is_none());
    }

    #[test]
    fn test_memory_store_save_overwrites() {
        let mut store = MemoryStore::new();
        store.save("s", &Loadout::new().equip(&hat())).unwrap();
        store.save("s", &Loadout::new()).unwrap();
        assert!(store.load("s").unwrap().unwrap().is_empty());
    }

    #[test]
    fn test_keys_are_independent() {
        let mut store = MemoryStore::new();
        store.save("a", &Loadout::new().equip(&hat())).unwrap();
        assert!(store.load("b").unwrap().is_none());
        assert_eq!(store.load("a").unwrap().unwrap().len(), 1);
    }
}
