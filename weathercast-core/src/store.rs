use directories::ProjectDirs;
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use crate::error::WeatherError;

/// The platform preferences surface the cache writes through: string values
/// under string keys. Implementations are expected to serialize concurrent
/// writers themselves (last write wins).
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, WeatherError>;
    fn put(&self, key: &str, value: &str) -> Result<(), WeatherError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, WeatherError> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &str) -> Result<(), WeatherError> {
        (**self).put(key, value)
    }
}

/// File-backed store: one JSON object of key/value strings, rewritten in full
/// on every `put`. The value is on disk by the time `put` returns.
#[derive(Debug)]
pub struct PrefsStore {
    path: PathBuf,
}

impl PrefsStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Platform data location for the production store file.
    pub fn default_path() -> Result<PathBuf, WeatherError> {
        let dirs = ProjectDirs::from("dev", "weathercast", "weathercast").ok_or_else(|| {
            WeatherError::Storage("could not determine platform data directory".to_string())
        })?;

        Ok(dirs.data_dir().join("preferences.json"))
    }

    fn load_map(&self) -> Result<HashMap<String, String>, WeatherError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }

        let contents = fs::read_to_string(&self.path).map_err(|e| {
            WeatherError::Storage(format!("failed to read {}: {e}", self.path.display()))
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            WeatherError::Storage(format!("store file {} is corrupt: {e}", self.path.display()))
        })
    }

    fn save_map(&self, map: &HashMap<String, String>) -> Result<(), WeatherError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                WeatherError::Storage(format!(
                    "failed to create store directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let contents = serde_json::to_string(map)
            .map_err(|e| WeatherError::Storage(format!("failed to serialize store: {e}")))?;

        fs::write(&self.path, contents).map_err(|e| {
            WeatherError::Storage(format!("failed to write {}: {e}", self.path.display()))
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for PrefsStore {
    fn get(&self, key: &str) -> Result<Option<String>, WeatherError> {
        Ok(self.load_map()?.remove(key))
    }

    fn put(&self, key: &str, value: &str) -> Result<(), WeatherError> {
        let mut map = self.load_map()?;
        map.insert(key.to_string(), value.to_string());
        self.save_map(&map)
    }
}

/// In-process store for tests and embedders that do not need persistence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, WeatherError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| WeatherError::Storage("memory store lock poisoned".to_string()))?;

        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), WeatherError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| WeatherError::Storage("memory store lock poisoned".to_string()))?;

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
