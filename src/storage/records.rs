//! Saved record repository
//!
//! Holds the ordered record list, newest first, and writes the whole list
//! back to the blob store after every mutation.

use crate::error::{FundsheetError, FundsheetResult};
use crate::models::{RecordId, SavedRecord};

use super::blob::BlobStore;

/// Store key for the record list
pub const RECORDS_KEY: &str = "budget_records";

/// Repository for saved records
pub struct RecordRepository<S: BlobStore> {
    store: S,
    records: Vec<SavedRecord>,
}

impl<S: BlobStore> RecordRepository<S> {
    /// Open the repository, hydrating from the store
    ///
    /// Missing data yields an empty repository. Unreadable data is logged,
    /// moved aside, and also yields an empty repository.
    pub fn open(mut store: S) -> Self {
        let records = match store.read(RECORDS_KEY) {
            Ok(None) => {
                tracing::debug!("No saved records found, starting empty");
                Vec::new()
            }
            Ok(Some(blob)) => match serde_json::from_str::<Vec<SavedRecord>>(&blob) {
                Ok(records) => dedupe(records),
                Err(e) => {
                    tracing::warn!(error = %e, "Saved records are malformed, starting empty");
                    if let Err(e) = store.quarantine(RECORDS_KEY) {
                        tracing::warn!(error = %e, "Could not move malformed records aside");
                    }
                    Vec::new()
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "Saved records unreadable, starting empty");
                Vec::new()
            }
        };

        Self { store, records }
    }

    /// All records, newest first
    pub fn list(&self) -> &[SavedRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &RecordId) -> Option<&SavedRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Find a record by id, or by 1-based position in the list
    pub fn find(&self, identifier: &str) -> Option<&SavedRecord> {
        let id = RecordId::from(identifier);
        self.get(&id).or_else(|| {
            identifier
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n >= 1)
                .and_then(|n| self.records.get(n - 1))
        })
    }

    /// Prepend a record and persist
    ///
    /// Fails with a conflict if a record with the same id exists. If the
    /// write fails the record is not kept.
    pub fn add(&mut self, record: SavedRecord) -> FundsheetResult<()> {
        if self.get(record.id()).is_some() {
            return Err(FundsheetError::record_conflict(record.id().to_string()));
        }

        let id = record.id().clone();
        self.records.insert(0, record);

        if let Err(e) = self.persist() {
            self.records.remove(0);
            return Err(e);
        }

        tracing::info!(record_id = %id, count = self.records.len(), "Record saved");
        Ok(())
    }

    /// Remove the record with `id` and persist
    ///
    /// Returns the removed record, or `None` (without writing) if absent.
    pub fn delete(&mut self, id: &RecordId) -> FundsheetResult<Option<SavedRecord>> {
        let Some(index) = self.records.iter().position(|r| r.id() == id) else {
            return Ok(None);
        };

        let removed = self.records.remove(index);

        if let Err(e) = self.persist() {
            self.records.insert(index, removed);
            return Err(e);
        }

        tracing::info!(record_id = %id, count = self.records.len(), "Record deleted");
        Ok(Some(removed))
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist(&mut self) -> FundsheetResult<()> {
        let blob = serde_json::to_string_pretty(&self.records)?;
        self.store.write(RECORDS_KEY, &blob)
    }
}

/// Drop later records that repeat an earlier id
fn dedupe(records: Vec<SavedRecord>) -> Vec<SavedRecord> {
    let mut seen = std::collections::HashSet::new();
    let total = records.len();
    let unique: Vec<_> = records
        .into_iter()
        .filter(|r| seen.insert(r.id().clone()))
        .collect();

    if unique.len() != total {
        tracing::warn!(
            dropped = total - unique.len(),
            "Duplicate record ids in stored data"
        );
    }

    unique
}
