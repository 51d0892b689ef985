//! Live sheet persistence
//!
//! Keeps the editable item set between command invocations.

use crate::error::FundsheetResult;
use crate::models::ExpenseItem;
use crate::services::ItemStore;

use super::blob::BlobStore;

/// Store key for the live item set
pub const ITEMS_KEY: &str = "budget_items";

/// Load the live sheet, falling back to the starter sheet when nothing
/// usable is stored
pub fn load_sheet<S: BlobStore>(store: &S) -> ItemStore {
    match store.read(ITEMS_KEY) {
        Ok(Some(blob)) => match serde_json::from_str::<Vec<ExpenseItem>>(&blob) {
            Ok(items) => ItemStore::from_items(items),
            Err(e) => {
                tracing::warn!(error = %e, "Stored sheet is malformed, using starter sheet");
                ItemStore::starter()
            }
        },
        Ok(None) => ItemStore::starter(),
        Err(e) => {
            tracing::warn!(error = %e, "Stored sheet unreadable, using starter sheet");
            ItemStore::starter()
        }
    }
}

/// Write the live sheet back to the store
pub fn save_sheet<S: BlobStore>(store: &mut S, sheet: &ItemStore) -> FundsheetResult<()> {
    let blob = serde_json::to_string_pretty(sheet.items())?;
    store.write(ITEMS_KEY, &blob)
}
