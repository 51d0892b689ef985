//! Storage layer for Fundsheet
//!
//! A key-value blob store with atomic file writes, the saved record
//! repository on top of it, and persistence for the live sheet.

pub mod blob;
pub mod file_io;
pub mod records;
pub mod sheet;

pub use blob::{BlobStore, FileBlobStore, MemoryBlobStore};
pub use file_io::{read_text, write_atomic};
pub use records::{RecordRepository, RECORDS_KEY};
pub use sheet::{load_sheet, save_sheet, ITEMS_KEY};

use crate::config::paths::FundsheetPaths;
use crate::error::FundsheetError;

/// Main storage coordinator: the record repository and the live sheet
pub struct Storage {
    paths: FundsheetPaths,
    sheet_store: FileBlobStore,
    pub records: RecordRepository<FileBlobStore>,
}

impl Storage {
    /// Open storage under the configured data directory
    pub fn open(paths: FundsheetPaths) -> Result<Self, FundsheetError> {
        paths.ensure_directories()?;

        let store = FileBlobStore::new(paths.data_dir());

        Ok(Self {
            records: RecordRepository::open(store.clone()),
            sheet_store: store,
            paths,
        })
    }

    pub fn paths(&self) -> &FundsheetPaths {
        &self.paths
    }

    /// Load the live sheet
    pub fn load_sheet(&self) -> crate::services::ItemStore {
        load_sheet(&self.sheet_store)
    }

    /// Persist the live sheet
    pub fn save_sheet(&mut self, sheet: &crate::services::ItemStore) -> Result<(), FundsheetError> {
        save_sheet(&mut self.sheet_store, sheet)
    }

    /// Whether a live sheet has been written before
    pub fn has_sheet(&self) -> bool {
        self.sheet_store.path_for(ITEMS_KEY).exists()
    }
}
