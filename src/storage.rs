//! Client-side key-value storage.
//!
//! A flat JSON object on disk (`~/.config/themeshift/storage.json`) holding
//! small plain-text values such as the generative API key. No encryption
//! and no expiry.

use crate::config::config_root_dir;
use crate::error::StorageError;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

/// Fixed storage key for the generative API credential.
pub const API_KEY_STORAGE_KEY: &str = "gemini-api-key";

/// String key-value storage.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Returns `true` when a value was removed.
    fn remove(&self, key: &str) -> Result<bool, StorageError>;
}

/// Returns the default storage path (`~/.config/themeshift/storage.json`) when available.
pub fn default_storage_path() -> Option<PathBuf> {
    config_root_dir().map(|dir| dir.join("themeshift").join("storage.json"))
}

/// JSON-file backed storage.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    path: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage at the default per-user path.
    pub fn open_default() -> Result<Self, StorageError> {
        default_storage_path()
            .map(Self::new)
            .ok_or(StorageError::Unavailable)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(load_entries(&self.path)?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = load_entries(&self.path)?;
        entries.insert(key.to_string(), value.to_string());
        write_entries(&self.path, &entries)?;
        debug!(path = %self.path.display(), key, "stored value");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool, StorageError> {
        let mut entries = load_entries(&self.path)?;
        let removed = entries.remove(key).is_some();
        if removed {
            write_entries(&self.path, &entries)?;
        }
        Ok(removed)
    }
}

/// In-process storage, for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool, StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.remove(key).is_some())
    }
}

/// Read the saved API key, if any. Blank values count as absent.
pub fn load_api_key(store: &dyn KeyValueStore) -> Result<Option<String>, StorageError> {
    Ok(store
        .get(API_KEY_STORAGE_KEY)?
        .filter(|value| !value.trim().is_empty()))
}

/// Save the API key. A blank key is ignored; returns whether it was saved.
pub fn save_api_key(store: &dyn KeyValueStore, api_key: &str) -> Result<bool, StorageError> {
    if api_key.trim().is_empty() {
        return Ok(false);
    }
    store.set(API_KEY_STORAGE_KEY, api_key)?;
    Ok(true)
}

/// Forget the saved API key.
pub fn clear_api_key(store: &dyn KeyValueStore) -> Result<bool, StorageError> {
    store.remove(API_KEY_STORAGE_KEY)
}

/// Mask a credential for display, keeping the last four characters.
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{tail}", "*".repeat(chars.len() - 4))
}

fn load_entries(path: &Path) -> Result<BTreeMap<String, String>, StorageError> {
    match std::fs::read_to_string(path) {
        Ok(text) if text.trim().is_empty() => Ok(BTreeMap::new()),
        Ok(text) => Ok(serde_json::from_str(&text)?),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
        Err(err) => Err(StorageError::Io(err)),
    }
}

fn write_entries(path: &Path, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let text = serde_json::to_string_pretty(entries)?;
    let mut options = std::fs::OpenOptions::new();
    options.create(true).truncate(true).write(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;
    file.write_all(text.as_bytes())?;
    file.flush()?;
    Ok(())
}
