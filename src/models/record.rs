//! Saved record model
//!
//! A saved record is a frozen snapshot of the sheet. It exposes no setters;
//! once built, the only way to change the stored set is to delete a whole
//! record from the repository.

use serde::{Deserialize, Serialize};

use super::ids::RecordId;
use super::item::SavedItem;
use super::summary::SummaryData;

/// Separator used by the flattened name list
pub const DETAILS_SEPARATOR: &str = ", ";

/// An immutable point-in-time budget snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedRecord {
    id: RecordId,

    /// Human-readable capture timestamp
    date: String,

    /// Included, non-zero items at capture time
    #[serde(default)]
    items: Vec<SavedItem>,

    summary: SummaryData,
}

impl SavedRecord {
    pub fn new(
        id: RecordId,
        date: impl Into<String>,
        items: Vec<SavedItem>,
        summary: SummaryData,
    ) -> Self {
        Self {
            id,
            date: date.into(),
            items,
            summary,
        }
    }

    pub fn id(&self) -> &RecordId {
        &self.id
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn items(&self) -> &[SavedItem] {
        &self.items
    }

    pub fn summary(&self) -> &SummaryData {
        &self.summary
    }

    /// Flattened view: the item names joined with `", "`, blanks skipped
    pub fn details(&self) -> String {
        self.items
            .iter()
            .map(|item| item.name.as_str())
            .filter(|name| !name.is_empty())
            .collect::<Vec<_>>()
            .join(DETAILS_SEPARATOR)
    }
}
