//! Item CLI commands
//!
//! Edits the live sheet. Every successful mutation writes the sheet back.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_item_details, format_sheet};
use crate::error::{FundsheetError, FundsheetResult};
use crate::models::{Category, ItemUpdate, Money};
use crate::services::ItemStore;
use crate::storage::Storage;

/// Item subcommands
#[derive(Subcommand, Debug)]
pub enum ItemCommands {
    /// List the sheet grouped by category
    List,

    /// Add an item to a category
    Add {
        /// Category (fixed, living, savings, short-term-debt, long-term-debt)
        category: String,

        /// Item name
        #[arg(short, long)]
        name: Option<String>,

        /// Amount; anything non-numeric counts as zero
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,

        /// Add the item excluded from totals
        #[arg(long)]
        exclude: bool,
    },

    /// Change fields of an item
    Set {
        /// Item ID, short ID or name
        item: String,

        /// New name
        #[arg(short, long)]
        name: Option<String>,

        /// New amount; anything non-numeric counts as zero
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,

        /// Move to another category
        #[arg(short, long)]
        category: Option<String>,

        /// Count the item in totals
        #[arg(long, conflicts_with = "exclude")]
        include: bool,

        /// Keep the item but leave it out of totals
        #[arg(long)]
        exclude: bool,
    },

    /// Remove an item from the sheet
    Delete {
        /// Item ID, short ID or name
        item: String,
    },
}

/// Handle an item command
pub fn handle_item_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: ItemCommands,
) -> FundsheetResult<()> {
    let symbol = settings.currency_symbol.as_str();
    let mut sheet = storage.load_sheet();

    match cmd {
        ItemCommands::List => {
            println!("{}", format_sheet(&sheet, symbol));
        }

        ItemCommands::Add {
            category,
            name,
            amount,
            exclude,
        } => {
            let category = parse_category(&category)?;
            let update = ItemUpdate {
                category: None,
                name,
                amount: amount.as_deref().map(parse_amount),
                included: exclude.then_some(false),
            };

            let item = sheet.add(category);
            item.apply(&update);
            let id = item.id;
            storage.save_sheet(&sheet)?;

            if let Some(item) = sheet.get(id) {
                println!("Added item:");
                println!("{}", format_item_details(item, symbol));
            }
        }

        ItemCommands::Set {
            item,
            name,
            amount,
            category,
            include,
            exclude,
        } => {
            let update = ItemUpdate {
                category: category.as_deref().map(parse_category).transpose()?,
                name,
                amount: amount.as_deref().map(parse_amount),
                included: if include {
                    Some(true)
                } else if exclude {
                    Some(false)
                } else {
                    None
                },
            };
            if update.is_empty() {
                return Err(FundsheetError::Validation(
                    "Nothing to change. Pass --name, --amount, --category, --include or --exclude"
                        .into(),
                ));
            }

            let id = resolve(&sheet, &item)?;
            sheet.update(id, &update)?;
            storage.save_sheet(&sheet)?;

            if let Some(item) = sheet.get(id) {
                println!("Updated item:");
                println!("{}", format_item_details(item, symbol));
            }
        }

        ItemCommands::Delete { item } => {
            let id = resolve(&sheet, &item)?;
            if let Some(removed) = sheet.delete(id) {
                storage.save_sheet(&sheet)?;
                let name = if removed.name.is_empty() {
                    "(unnamed)"
                } else {
                    removed.name.as_str()
                };
                println!("Deleted {} from {}", name, removed.category.label());
            }
        }
    }

    Ok(())
}

fn resolve(sheet: &ItemStore, identifier: &str) -> FundsheetResult<crate::models::ItemId> {
    sheet
        .find(identifier)
        .map(|i| i.id)
        .ok_or_else(|| FundsheetError::item_not_found(identifier))
}

fn parse_category(input: &str) -> FundsheetResult<Category> {
    input
        .parse()
        .map_err(|e: crate::models::UnknownCategory| FundsheetError::Validation(e.to_string()))
}

/// Amount input never fails; unparseable text becomes zero
fn parse_amount(input: &str) -> Money {
    Money::parse(input).unwrap_or_else(|e| {
        tracing::warn!(input, error = %e, "Amount is not a number, using zero");
        Money::zero()
    })
}
