//! Key-value blob storage.
//!
//! The expense store persists its whole collection as one text blob under
//! a fixed key. This module abstracts the medium behind a two-method
//! trait so the store is testable without touching the filesystem.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::info;

use crate::error::ExpenseError;

/// Text blob store keyed by namespace strings.
pub trait KvStore: Send + Sync {
    /// Read the blob stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, ExpenseError>;

    /// Overwrite the blob stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), ExpenseError>;
}

/// In-memory store, for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryKv {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryKv {
    fn get(&self, key: &str) -> Result<Option<String>, ExpenseError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| ExpenseError::Storage("storage lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ExpenseError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| ExpenseError::Storage("storage lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store: each key maps to one file under the data directory.
#[derive(Debug)]
pub struct FileKv {
    dir: PathBuf,
}

impl FileKv {
    /// Open a store rooted at the given directory, creating it if needed.
    pub fn open(dir: &Path) -> Result<Self, ExpenseError> {
        std::fs::create_dir_all(dir).map_err(|e| {
            ExpenseError::Storage(format!(
                "Failed to create data directory {}: {}",
                dir.display(),
                e
            ))
        })?;
        info!("Expense data directory at {}", dir.display());
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KvStore for FileKv {
    fn get(&self, key: &str) -> Result<Option<String>, ExpenseError> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ExpenseError::Storage(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ExpenseError> {
        let path = self.path_for(key);
        std::fs::write(&path, value).map_err(|e| {
            ExpenseError::Storage(format!("Failed to write {}: {}", path.display(), e))
        })
    }
}
