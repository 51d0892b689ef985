//! Key-value blob store
//!
//! The persisted state is a handful of named text blobs. The file store
//! keeps one `<key>.json` per key; the memory store backs tests and
//! embedders that persist elsewhere.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::FundsheetResult;

use super::file_io::{quarantine, read_text, write_atomic};

/// A store of named text blobs
pub trait BlobStore {
    /// Read the blob stored under `key`, if any
    fn read(&self, key: &str) -> FundsheetResult<Option<String>>;

    /// Replace the blob stored under `key`
    fn write(&mut self, key: &str, blob: &str) -> FundsheetResult<()>;

    /// Set an unreadable blob aside so a later write does not destroy it
    fn quarantine(&mut self, key: &str) -> FundsheetResult<()>;
}

/// Blobs as JSON files in a directory
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Path an unreadable blob under `key` is moved to
    pub fn quarantine_path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.corrupt", key))
    }
}

impl BlobStore for FileBlobStore {
    fn read(&self, key: &str) -> FundsheetResult<Option<String>> {
        read_text(self.path_for(key))
    }

    fn write(&mut self, key: &str, blob: &str) -> FundsheetResult<()> {
        write_atomic(self.path_for(key), blob.as_bytes())
    }

    fn quarantine(&mut self, key: &str) -> FundsheetResult<()> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(());
        }
        let target = self.quarantine_path_for(key);
        quarantine(&path, &target)?;
        tracing::warn!(path = %target.display(), "Unreadable data moved aside");
        Ok(())
    }
}

/// Blobs held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blobs: HashMap<String, String>,
    writes: usize,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with one blob
    pub fn with_blob(key: &str, blob: impl Into<String>) -> Self {
        let mut store = Self::default();
        store.blobs.insert(key.to_string(), blob.into());
        store
    }

    /// Number of writes performed since creation
    pub fn write_count(&self) -> usize {
        self.writes
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.blobs.get(key).map(String::as_str)
    }
}

impl BlobStore for MemoryBlobStore {
    fn read(&self, key: &str) -> FundsheetResult<Option<String>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn write(&mut self, key: &str, blob: &str) -> FundsheetResult<()> {
        self.blobs.insert(key.to_string(), blob.to_string());
        self.writes += 1;
        Ok(())
    }

    fn quarantine(&mut self, key: &str) -> FundsheetResult<()> {
        if let Some(blob) = self.blobs.remove(key) {
            self.blobs.insert(format!("{}.corrupt", key), blob);
        }
        Ok(())
    }
}

/// A store whose writes always fail, for exercising error paths
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct FailingBlobStore;

#[cfg(test)]
impl BlobStore for FailingBlobStore {
    fn read(&self, _key: &str) -> FundsheetResult<Option<String>> {
        Ok(None)
    }

    fn write(&mut self, key: &str, _blob: &str) -> FundsheetResult<()> {
        Err(crate::error::FundsheetError::Storage(format!(
            "write refused for {}",
            key
        )))
    }

    fn quarantine(&mut self, _key: &str) -> FundsheetResult<()> {
        Ok(())
    }
}
