//! Saved record CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_record_details, format_record_list};
use crate::error::{FundsheetError, FundsheetResult};
use crate::services::{summarize, RecordFactory};
use crate::storage::Storage;

/// Attempts at capturing a record whose id is not already stored
const CAPTURE_ATTEMPTS: usize = 3;

/// Record subcommands
#[derive(Subcommand, Debug)]
pub enum RecordCommands {
    /// Snapshot the current sheet as a saved record
    Save,

    /// List saved records, newest first
    List,

    /// Show one record with its items
    Show {
        /// Record ID or list position (1 = newest)
        record: String,
    },

    /// Delete a saved record
    Delete {
        /// Record ID or list position (1 = newest)
        record: String,
    },
}

/// Handle a record command
pub fn handle_record_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: RecordCommands,
) -> FundsheetResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        RecordCommands::Save => {
            let sheet = storage.load_sheet();
            let summary = summarize(sheet.items());
            let factory = RecordFactory::new(settings.record_date_format.as_str());

            let mut attempt = 1;
            let record = loop {
                let record = factory.capture(sheet.items(), &summary);
                match storage.records.add(record.clone()) {
                    Ok(()) => break record,
                    Err(e) if e.is_conflict() && attempt < CAPTURE_ATTEMPTS => {
                        tracing::warn!(record_id = %record.id(), "Record id already stored, retrying");
                        attempt += 1;
                    }
                    Err(e) => return Err(e),
                }
            };

            println!("Saved record {} ({})", record.id(), record.date());
            println!(
                "Monthly total: {}  Savings: {}",
                summary.monthly_total().format_grouped(symbol),
                summary.savings_total().format_grouped(symbol)
            );
        }

        RecordCommands::List => {
            println!("{}", format_record_list(storage.records.list(), symbol));
        }

        RecordCommands::Show { record } => {
            let found = storage
                .records
                .find(&record)
                .ok_or_else(|| FundsheetError::record_not_found(record.as_str()))?;
            println!("{}", format_record_details(found, symbol));
        }

        RecordCommands::Delete { record } => {
            let Some(id) = storage.records.find(&record).map(|r| r.id().clone()) else {
                println!("No record matches '{}'; nothing deleted.", record);
                return Ok(());
            };

            if let Some(removed) = storage.records.delete(&id)? {
                println!("Deleted record {} ({})", removed.id(), removed.date());
            }
        }
    }

    Ok(())
}
