//! Fundsheet - monthly expense sheet with snapshots and spreadsheet export
//!
//! This library holds the expense sheet model, the monthly rollup, saved
//! snapshots of the sheet and the exports built from them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Items, categories, money, summaries and saved records
//! - `services`: The live sheet, rollup and record capture
//! - `storage`: Key-value blob storage and the record repository
//! - `export`: CSV, tab-separated and workbook exports
//! - `advice`: Request text for the advice collaborator
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use fundsheet_cli::config::paths::FundsheetPaths;
//! use fundsheet_cli::services::{summarize, RecordFactory};
//! use fundsheet_cli::storage::Storage;
//!
//! let mut storage = Storage::open(FundsheetPaths::new()?)?;
//! let sheet = storage.load_sheet();
//! let record = RecordFactory::default().capture(sheet.items(), &summarize(sheet.items()));
//! storage.records.add(record)?;
//! ```

pub mod advice;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::FundsheetError;
