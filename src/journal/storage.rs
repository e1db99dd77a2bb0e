//! Storage Module
//!
//! Durable persistence for the journal: one key-value slot holding the
//! full entry list as a JSON array. The store receives a boxed backend
//! at construction, so tests can swap the filesystem for memory.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::{JournalError, Result};
use crate::journal::entry::Entry;

// == Storage Trait ==
/// A single durable slot for the serialized entry list.
pub trait Storage: Send + Sync {
    /// Overwrites the slot with the given entries.
    fn save(&self, entries: &[Entry]) -> Result<()>;

    /// Reads the slot back; an absent slot yields an empty list.
    fn load(&self) -> Result<Vec<Entry>>;
}

// == JSON File Storage ==
/// Filesystem-backed slot: one JSON file with the whole entry list.
#[derive(Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for JsonFileStorage {
    fn save(&self, entries: &[Entry]) -> Result<()> {
        let serialized = serde_json::to_string(entries)
            .map_err(|e| JournalError::Storage(format!("serialize failed: {e}")))?;
        fs::write(&self.path, serialized).map_err(|e| {
            JournalError::Storage(format!("write to {} failed: {e}", self.path.display()))
        })
    }

    fn load(&self) -> Result<Vec<Entry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path).map_err(|e| {
            JournalError::Storage(format!("read from {} failed: {e}", self.path.display()))
        })?;
        serde_json::from_str(&raw)
            .map_err(|e| JournalError::Storage(format!("corrupt journal data: {e}")))
    }
}

// == Memory Storage ==
/// In-memory slot holding the same serialized JSON a file would.
///
/// Used by tests and as a fallback when no data path is wanted.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw serialized contents of the slot, if any.
    pub fn raw(&self) -> Option<String> {
        match self.slot.lock() {
            Ok(slot) => slot.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Storage for MemoryStorage {
    fn save(&self, entries: &[Entry]) -> Result<()> {
        let serialized = serde_json::to_string(entries)
            .map_err(|e| JournalError::Storage(format!("serialize failed: {e}")))?;
        match self.slot.lock() {
            Ok(mut slot) => *slot = Some(serialized),
            Err(poisoned) => *poisoned.into_inner() = Some(serialized),
        }
        Ok(())
    }

    fn load(&self) -> Result<Vec<Entry>> {
        let raw = self.raw();
        match raw {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| JournalError::Storage(format!("corrupt journal data: {e}"))),
        }
    }
}

// == Failing Storage (test support) ==
/// Backend whose saves always fail, for persistence-degradation tests.
#[cfg(test)]
pub(crate) struct FailingStorage;

#[cfg(test)]
impl Storage for FailingStorage {
    fn save(&self, _entries: &[Entry]) -> Result<()> {
        Err(JournalError::Storage("slot quota exceeded".to_string()))
    }

    fn load(&self) -> Result<Vec<Entry>> {
        Err(JournalError::Storage("slot unreadable".to_string()))
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entries() -> Vec<Entry> {
        vec![Entry {
            id: 1,
            timestamp: 1_700_000_000_000,
            topic: "First entry".to_string(),
            content: "Something worth remembering.".to_string(),
            link: None,
            image_url: Some("https://example.com/pic.png".to_string()),
        }]
    }

    #[test]
    fn test_memory_storage_round_trip() {
        let storage = MemoryStorage::new();

        storage.save(&sample_entries()).unwrap();
        let loaded = storage.load().unwrap();

        assert_eq!(loaded, sample_entries());
    }

    #[test]
    fn test_memory_storage_empty_slot_loads_empty_list() {
        let storage = MemoryStorage::new();
        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn test_memory_storage_slot_is_a_json_array() {
        let storage = MemoryStorage::new();
        storage.save(&sample_entries()).unwrap();

        let raw = storage.raw().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(parsed.is_array());
        assert_eq!(parsed[0]["imageUrl"], "https://example.com/pic.png");
    }

    #[test]
    fn test_file_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("journal.json"));

        storage.save(&sample_entries()).unwrap();
        let loaded = storage.load().unwrap();

        assert_eq!(loaded, sample_entries());
    }

    #[test]
    fn test_file_storage_missing_file_loads_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("absent.json"));

        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn test_file_storage_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.json");
        fs::write(&path, "{not json").unwrap();

        let storage = JsonFileStorage::new(path);
        assert!(matches!(
            storage.load(),
            Err(JournalError::Storage(_))
        ));
    }
}
