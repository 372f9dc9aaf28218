use ahash::AHashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::SessionError;

/// A keyed slot of text, the shape of a browser `localStorage` entry.
///
/// Implementations only need to move strings in and out; the session store
/// owns serialization and key policy.
pub trait SlotStorage {
    fn put(&mut self, key: &str, value: &str) -> Result<(), SessionError>;
    fn get(&self, key: &str) -> Result<Option<String>, SessionError>;
    fn remove(&mut self, key: &str) -> Result<(), SessionError>;
}

/// Volatile storage backed by a hash map. Useful for tests, script bindings
/// and hosts that manage persistence themselves.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: AHashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStorage for MemoryStorage {
    fn put(&mut self, key: &str, value: &str) -> Result<(), SessionError> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.slots.get(key).cloned())
    }

    fn remove(&mut self, key: &str) -> Result<(), SessionError> {
        self.slots.remove(key);
        Ok(())
    }
}

/// Durable storage keeping one `<key>.json` file per slot under a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Opens the storage directory, creating it if needed.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self, SessionError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|e| SessionError::Storage {
            key: dir.display().to_string(),
            message: format!("could not create storage directory: {}", e),
        })?;
        Ok(Self { dir })
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl SlotStorage for FileStorage {
    fn put(&mut self, key: &str, value: &str) -> Result<(), SessionError> {
        fs::write(self.slot_path(key), value).map_err(|e| SessionError::Storage {
            key: key.to_string(),
            message: format!("could not write slot file: {}", e),
        })
    }

    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SessionError::Storage {
                key: key.to_string(),
                message: format!("could not read slot file: {}", e),
            }),
        }
    }

    fn remove(&mut self, key: &str) -> Result<(), SessionError> {
        match fs::remove_file(self.slot_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::Storage {
                key: key.to_string(),
                message: format!("could not remove slot file: {}", e),
            }),
        }
    }
}
