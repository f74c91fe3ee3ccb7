use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use crate::{error::storage::StorageError, storage::KeyValueStore};

const APP_DIR: &str = "havasi";
const FILE_NAME: &str = "storage.json";

/// JSON file backed store for native builds
///
/// The whole map is rewritten on every change through a temporary file and rename,
/// so a crash mid-write leaves the previous contents intact.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Store under the platform's local data directory, e.g. `~/.local/share/havasi/storage.json`.
    pub fn in_data_dir() -> Result<Self, StorageError> {
        let dir = dirs::data_local_dir().ok_or_else(|| {
            StorageError::Unavailable("no local data directory on this platform".to_string())
        })?;

        Ok(Self::new(dir.join(APP_DIR).join(FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(StorageError::Read(format!("{}: {}", self.path.display(), e))),
        }
    }

    fn write(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(entries)?)
            .map_err(|e| StorageError::Write(format!("{}: {}", tmp.display(), e)))?;
        fs::rename(&tmp, &self.path)
            .map_err(|e| StorageError::Write(format!("{}: {}", self.path.display(), e)))?;

        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());

        Ok(self.read()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());

        let mut entries = self.read()?;
        entries.insert(key.to_string(), value.to_string());
        self.write(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());

        let mut entries = self.read()?;
        if entries.remove(key).is_some() {
            self.write(&entries)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expect values to survive a new store instance on the same path
    #[test]
    fn persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(FILE_NAME);

        FileStore::new(&path).set("access_token", "tok").unwrap();
        let reopened = FileStore::new(&path);

        assert_eq!(reopened.get("access_token").unwrap().as_deref(), Some("tok"));
    }

    /// Expect a missing file to read as empty and removal to be a no-op
    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join(FILE_NAME));

        assert!(store.get("user_id").unwrap().is_none());
        assert!(store.remove("user_id").is_ok());
        assert!(!store.path().exists());
    }

    /// Expect a corrupt file to surface a serde error instead of silently resetting
    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);
        fs::write(&path, "{not json").unwrap();

        let result = FileStore::new(&path).get("theme");

        assert!(matches!(result, Err(StorageError::Serde(_))));
    }
}
