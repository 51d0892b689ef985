//! Core data models for Fundsheet
//!
//! Expense items, categories, rollup summaries and saved records.

pub mod category;
pub mod ids;
pub mod item;
pub mod money;
pub mod record;
pub mod summary;

pub use category::{Category, UnknownCategory};
pub use ids::{ItemId, RecordId};
pub use item::{ExpenseItem, ItemUpdate, SavedItem};
pub use money::{Money, MoneyParseError};
pub use record::SavedRecord;
pub use summary::SummaryData;
