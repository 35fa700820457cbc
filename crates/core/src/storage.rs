//! Cart storage backends.
//!
//! The durable client-side store the cart persists into: a flat namespace
//! of string records addressed by key, where an absent key means "no cart".

use std::{
    collections::HashMap,
    fmt::Debug,
    fs, io,
    path::PathBuf,
};

use thiserror::Error;

/// Errors from a cart storage backend.
#[derive(Debug, Error)]
pub enum CartStorageError {
    /// The backing store could not be read or written.
    #[error("cart storage I/O failed")]
    Io(#[from] io::Error),
}

/// Durable keyed storage for serialized cart records.
pub trait CartStorage: Debug {
    /// Reads the record stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, CartStorageError>;

    /// Writes `value` under `key`, replacing any previous record.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store cannot be written.
    fn store(&mut self, key: &str, value: &str) -> Result<(), CartStorageError>;

    /// Deletes the record under `key`. Deleting an absent key is not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), CartStorageError>;
}

/// File-backed storage: one JSON file per key under a base directory.
///
/// Writes are last-write-wins; when several processes share the directory
/// nothing refreshes their in-memory carts.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Creates storage rooted at `dir`. The directory is created lazily on
    /// the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl CartStorage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>, CartStorageError> {
        match fs::read_to_string(self.path(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn store(&mut self, key: &str, value: &str) -> Result<(), CartStorageError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path(key), value)?;

        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), CartStorageError> {
        match fs::remove_file(self.path(key)) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}

/// In-memory storage for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    records: HashMap<String, String>,
}

impl MemoryStorage {
    /// Creates empty in-memory storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates storage pre-seeded with a single record, as if a previous
    /// session had persisted it.
    pub fn with_record(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.records.insert(key.to_string(), value.to_string());
        storage
    }

    /// The raw record under `key`, if any.
    pub fn record(&self, key: &str) -> Option<&str> {
        self.records.get(key).map(String::as_str)
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, CartStorageError> {
        Ok(self.records.get(key).cloned())
    }

    fn store(&mut self, key: &str, value: &str) -> Result<(), CartStorageError> {
        self.records.insert(key.to_string(), value.to_string());

        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), CartStorageError> {
        self.records.remove(key);

        Ok(())
    }
}
