use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tempfile::NamedTempFile;

/// File name of the key-value store inside the data directory
pub const STORAGE_FILE: &str = "local_storage.json";

/// Error type for storage writes
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("could not write {path}: {source}")]
    WriteError { path: PathBuf, source: io::Error },
    #[error("could not encode storage: {0}")]
    EncodeError(#[from] serde_json::Error),
}

/// A string key-value store, shaped like browser local storage
pub trait Storage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

// ---------------------------------------------------------------------------
// File-backed storage
// ---------------------------------------------------------------------------

/// Storage kept in a single JSON object on disk.
///
/// The whole file is read once on open and rewritten atomically on every
/// write. A missing or corrupt file opens as empty storage.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    items: IndexMap<String, String>,
}

impl FileStorage {
    /// Open the storage file in `data_dir`
    pub fn open(data_dir: &Path) -> Self {
        Self::open_path(data_dir.join(STORAGE_FILE))
    }

    pub fn open_path(path: PathBuf) -> Self {
        let items = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "corrupt storage file, starting empty"
                );
                IndexMap::new()
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => IndexMap::new(),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "could not read storage file, starting empty"
                );
                IndexMap::new()
            }
        };
        FileStorage { path, items }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(&self.items)?;
        let write_error = |e| StorageError::WriteError {
            path: self.path.clone(),
            source: e,
        };
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(write_error)?;
        }
        atomic_write(&self.path, content.as_bytes()).map_err(write_error)
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        if self.items.shift_remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

/// Write `content` to `path` atomically using a temp file + rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// In-memory storage
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: IndexMap<String, String>,
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.items.shift_remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn set_and_reopen() {
        let dir = TempDir::new().unwrap();
        let mut storage = FileStorage::open(dir.path());
        storage.set_item("theme", "dark").unwrap();
        storage.set_item("lang", "en").unwrap();

        let reopened = FileStorage::open(dir.path());
        assert_eq!(reopened.get_item("theme").as_deref(), Some("dark"));
        assert_eq!(reopened.get_item("lang").as_deref(), Some("en"));
        assert_eq!(reopened.get_item("missing"), None);
    }

    #[test]
    fn keys_keep_insertion_order_on_disk() {
        let dir = TempDir::new().unwrap();
        let mut storage = FileStorage::open(dir.path());
        storage.set_item("zeta", "1").unwrap();
        storage.set_item("alpha", "2").unwrap();
        let content = fs::read_to_string(dir.path().join(STORAGE_FILE)).unwrap();
        assert!(content.find("zeta").unwrap() < content.find("alpha").unwrap());
    }

    #[test]
    fn remove_item_persists() {
        let dir = TempDir::new().unwrap();
        let mut storage = FileStorage::open(dir.path());
        storage.set_item("k", "v").unwrap();
        storage.remove_item("k").unwrap();
        assert_eq!(FileStorage::open(dir.path()).get_item("k"), None);
    }

    #[test]
    fn corrupt_file_opens_empty() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(STORAGE_FILE), "not json {{{").unwrap();
        let storage = FileStorage::open(dir.path());
        assert_eq!(storage.get_item("anything"), None);
    }

    #[test]
    fn unreadable_file_opens_empty() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(STORAGE_FILE), [0xff, 0xfe, 0x00]).unwrap();
        let storage = FileStorage::open(dir.path());
        assert_eq!(storage.get_item("anything"), None);

        // A directory in place of the file is a read error too
        let other = TempDir::new().unwrap();
        fs::create_dir(other.path().join(STORAGE_FILE)).unwrap();
        assert_eq!(FileStorage::open(other.path()).get_item("k"), None);
    }

    #[test]
    fn creates_missing_data_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a/b");
        let mut storage = FileStorage::open(&nested);
        storage.set_item("k", "v").unwrap();
        assert!(nested.join(STORAGE_FILE).exists());
    }

    #[test]
    fn memory_storage() {
        let mut storage = MemoryStorage::default();
        storage.set_item("k", "v").unwrap();
        assert_eq!(storage.get_item("k").as_deref(), Some("v"));
        storage.remove_item("k").unwrap();
        assert_eq!(storage.get_item("k"), None);
    }
}
