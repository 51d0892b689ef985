//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod export;
pub mod item;
pub mod record;
pub mod summary;

pub use export::{handle_export_command, ExportCommands};
pub use item::{handle_item_command, ItemCommands};
pub use record::{handle_record_command, RecordCommands};
pub use summary::{handle_advice_command, handle_summary_command};
