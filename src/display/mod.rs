//! Display formatting for terminal output
//!
//! Formats the live sheet, its summary and saved records as plain text.

pub mod item;
pub mod record;
pub mod summary;

pub use item::{format_item_details, format_sheet};
pub use record::{format_record_details, format_record_list};
pub use summary::format_summary;
