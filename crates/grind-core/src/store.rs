use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::GrindError;
use crate::GrindResult;

/// Key holding the array of completed link ids.
pub const KEY_COMPLETED_LINKS: &str = "completedLinks";
/// Key holding the color theme.
pub const KEY_THEME: &str = "theme";

/// On-disk shape: a flat key-value map plus a save timestamp.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    data: BTreeMap<String, Value>,
}

/// The single local key-value store. One JSON file; nothing else in the
/// system persists anything.
#[derive(Debug)]
pub struct LocalStore {
    path: PathBuf,
    file: StoreFile,
}

impl LocalStore {
    /// Open the store at `path`. A missing file yields an empty store;
    /// unreadable or corrupt JSON is an error.
    pub fn open(path: impl Into<PathBuf>) -> GrindResult<LocalStore> {
        let path = path.into();
        let file = match std::fs::read_to_string(&path) {
            Ok(contents) => {
                serde_json::from_str(&contents).map_err(|e| GrindError::Store {
                    path: path.display().to_string(),
                    reason: format!("corrupt store file: {e}"),
                })?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => StoreFile::default(),
            Err(e) => {
                return Err(GrindError::Store {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                })
            }
        };
        Ok(LocalStore { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Timestamp of the last save, if the store has ever been saved.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.file.updated_at
    }

    /// Read and deserialise a key. `Ok(None)` when absent.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> GrindResult<Option<T>> {
        match self.file.data.get(key) {
            None => Ok(None),
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
        }
    }

    /// Serialise and stage a value under `key`. Not persisted until `save`.
    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) -> GrindResult<()> {
        self.file.data.insert(key.to_string(), serde_json::to_value(value)?);
        Ok(())
    }

    /// Drop a key. Returns whether it was present.
    pub fn remove(&mut self, key: &str) -> bool {
        self.file.data.remove(key).is_some()
    }

    /// Write the store to disk, stamping `updated_at`. Parent directories
    /// are created as needed.
    pub fn save(&mut self) -> GrindResult<()> {
        self.file.updated_at = Some(Utc::now());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| GrindError::Store {
                    path: self.path.display().to_string(),
                    reason: e.to_string(),
                })?;
            }
        }

        let contents = serde_json::to_string_pretty(&self.file)?;
        std::fs::write(&self.path, contents).map_err(|e| GrindError::Store {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty_store() {
        let dir = TempDir::new().unwrap();
        let store = LocalStore::open(dir.path().join("store.json")).unwrap();
        assert_eq!(store.get::<Vec<String>>(KEY_COMPLETED_LINKS).unwrap(), None);
        assert_eq!(store.updated_at(), None);
    }

    #[test]
    fn test_set_save_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");

        let mut store = LocalStore::open(&path).unwrap();
        store
            .set(KEY_COMPLETED_LINKS, &vec!["a".to_string(), "b".to_string()])
            .unwrap();
        store.set(KEY_THEME, &"dark").unwrap();
        store.save().unwrap();

        let reloaded = LocalStore::open(&path).unwrap();
        assert_eq!(
            reloaded.get::<Vec<String>>(KEY_COMPLETED_LINKS).unwrap(),
            Some(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(reloaded.get::<String>(KEY_THEME).unwrap(), Some("dark".to_string()));
        assert!(reloaded.updated_at().is_some());
    }

    #[test]
    fn test_remove_key() {
        let dir = TempDir::new().unwrap();
        let mut store = LocalStore::open(dir.path().join("store.json")).unwrap();
        store.set(KEY_THEME, &"dark").unwrap();

        assert!(store.remove(KEY_THEME));
        assert!(!store.remove(KEY_THEME));
        assert_eq!(store.get::<String>(KEY_THEME).unwrap(), None);
    }

    #[test]
    fn test_corrupt_file_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(matches!(
            LocalStore::open(&path),
            Err(GrindError::Store { .. })
        ));
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("store.json");

        let mut store = LocalStore::open(&path).unwrap();
        store.set(KEY_THEME, &"light").unwrap();
        store.save().unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_wrong_type_is_serialization_error() {
        let dir = TempDir::new().unwrap();
        let mut store = LocalStore::open(dir.path().join("store.json")).unwrap();
        store.set(KEY_THEME, &"dark").unwrap();

        assert!(matches!(
            store.get::<u32>(KEY_THEME),
            Err(GrindError::SerializationError(_))
        ));
    }
}
