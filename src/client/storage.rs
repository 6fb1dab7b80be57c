//! Small persisted key/value state.
//!
//! Values are JSON strings. [`JsonFileStore`] keeps one file per key and replaces files
//! atomically, so a crash mid-write leaves either the old or the new value. Reading
//! favorites never fails: absent, unreadable or malformed data is an empty set.

use std::{
    collections::{BTreeSet, HashMap},
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

use serde_json::{Map, Value};
use tempfile::NamedTempFile;

use crate::{client::error::StorageError, model::input::CountryCode};

/// Key holding the favorites cache, a JSON object of `code -> bool`.
pub const FAVORITES_KEY: &str = "favoriteCountries";

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Removes a key, succeeding if it doesn't exist.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Store keeping one `<key>.json` file per key in a directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Opens a store in `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;

        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }

        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)?) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;

        let mut temp_file = NamedTempFile::new_in(&self.dir)?;
        temp_file.write_all(value.as_bytes())?;
        temp_file.as_file().sync_all()?;
        temp_file.persist(&path)?;

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)?) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

/// In-memory store, for tests and for clients without a writable disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);

        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);

        Ok(())
    }
}

/// Reads the favorites cache.
///
/// Accepts the `{"FRA": true}` object format and the older `["FRA"]` array format. Entries
/// that aren't valid codes are skipped, anything else unreadable yields an empty set.
pub fn load_favorites(store: &dyn KeyValueStore) -> BTreeSet<CountryCode> {
    let raw = match store.get(FAVORITES_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return BTreeSet::new(),
        Err(e) => {
            tracing::warn!("Failed to read {FAVORITES_KEY}, starting with no favorites: {e}");
            return BTreeSet::new();
        }
    };

    match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Object(entries)) => entries
            .into_iter()
            .filter(|(_, value)| value.as_bool() == Some(true))
            .filter_map(|(code, _)| parse_stored_code(&code))
            .collect(),
        Ok(Value::Array(codes)) => codes
            .iter()
            .filter_map(Value::as_str)
            .filter_map(parse_stored_code)
            .collect(),
        Ok(Value::Null) => BTreeSet::new(),
        Ok(other) => {
            tracing::warn!("Ignoring {FAVORITES_KEY} with unexpected shape: {other}");
            BTreeSet::new()
        }
        Err(e) => {
            tracing::warn!("Ignoring malformed {FAVORITES_KEY}: {e}");
            BTreeSet::new()
        }
    }
}

fn parse_stored_code(raw: &str) -> Option<CountryCode> {
    match CountryCode::parse(raw) {
        Ok(code) => Some(code),
        Err(e) => {
            tracing::debug!("Skipping stored favorite: {e}");
            None
        }
    }
}

/// Writes the favorites cache in the `{"FRA": true}` format.
pub fn save_favorites(
    store: &dyn KeyValueStore,
    favorites: &BTreeSet<CountryCode>,
) -> Result<(), StorageError> {
    let entries: Map<String, Value> = favorites
        .iter()
        .map(|code| (code.to_string(), Value::Bool(true)))
        .collect();

    store.set(FAVORITES_KEY, &serde_json::to_string(&entries)?)
}

pub fn clear_favorites(store: &dyn KeyValueStore) -> Result<(), StorageError> {
    store.remove(FAVORITES_KEY)
}
