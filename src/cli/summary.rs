//! Summary and advice commands

use crate::advice::build_prompt;
use crate::config::settings::Settings;
use crate::display::format_summary;
use crate::error::FundsheetResult;
use crate::services::summarize;
use crate::storage::Storage;

/// Print the rollup of the live sheet
pub fn handle_summary_command(storage: &Storage, settings: &Settings) -> FundsheetResult<()> {
    let sheet = storage.load_sheet();
    let summary = summarize(sheet.items());
    println!("{}", format_summary(&summary, &settings.currency_symbol));
    Ok(())
}

/// Print the advice request for the live sheet
pub fn handle_advice_command(storage: &Storage, settings: &Settings) -> FundsheetResult<()> {
    let sheet = storage.load_sheet();
    let summary = summarize(sheet.items());
    println!(
        "{}",
        build_prompt(sheet.items(), &summary, &settings.currency_symbol)
    );
    Ok(())
}
