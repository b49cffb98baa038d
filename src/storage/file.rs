use crate::error::StorageError;
use crate::storage::KeyValueStorage;
use camino::{Utf8Path, Utf8PathBuf};
use indexmap::IndexMap;
use std::fs;
use std::sync::RwLock;

/// File-backed key-value storage.
///
/// The whole key-value map is held in memory and written out as a single
/// YAML document on every mutation. A missing file on construction means an
/// empty store, not an error; an unreadable or malformed file is an error
/// so callers don't silently lose persisted settings.
#[derive(Debug)]
pub struct FileStorage {
    path: Utf8PathBuf,
    entries: RwLock<IndexMap<String, String>>,
}

impl FileStorage {
    /// Open (or create) the storage document at `path`.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn open<P: AsRef<Utf8Path>>(path: P) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|source| StorageError::Io {
                path: parent.to_string(),
                source,
            })?;
        }

        let entries = if path.exists() {
            let contents = fs::read_to_string(&path).map_err(|source| StorageError::Io {
                path: path.to_string(),
                source,
            })?;

            serde_yaml_ng::from_str(&contents).map_err(|source| StorageError::Decode {
                path: path.to_string(),
                source,
            })?
        } else {
            tracing::debug!("No storage document at {}, starting empty", path);
            IndexMap::new()
        };

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    fn flush(&self, entries: &IndexMap<String, String>) -> Result<(), StorageError> {
        let document = serde_yaml_ng::to_string(entries).map_err(StorageError::Encode)?;

        fs::write(&self.path, document).map_err(|source| StorageError::Io {
            path: self.path.to_string(),
            source,
        })
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.read().unwrap();
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().unwrap();
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().unwrap();
        if entries.shift_remove(key).is_some() {
            self.flush(&entries)?;
        }
        Ok(())
    }
}
