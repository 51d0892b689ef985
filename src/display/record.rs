//! Saved record display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::SavedRecord;

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Monthly")]
    monthly: String,
    #[tabled(rename = "Savings")]
    savings: String,
    #[tabled(rename = "Items")]
    items: usize,
}

/// Format saved records as a table, newest first
pub fn format_record_list(records: &[SavedRecord], symbol: &str) -> String {
    if records.is_empty() {
        return "No saved records.".to_string();
    }

    let rows = records.iter().enumerate().map(|(i, r)| RecordRow {
        position: i + 1,
        id: r.id().to_string(),
        date: r.date().to_string(),
        monthly: r.summary().monthly_total().format_grouped(symbol),
        savings: r.summary().savings_total().format_grouped(symbol),
        items: r.items().len(),
    });

    Table::new(rows).with(Style::psql()).to_string()
}

/// Format one record with its items and totals
pub fn format_record_details(record: &SavedRecord, symbol: &str) -> String {
    let summary = record.summary();
    let mut output = String::new();

    output.push_str(&format!("Record:  {}\n", record.id()));
    output.push_str(&format!("Date:    {}\n", record.date()));
    output.push_str(&format!("Details: {}\n\n", record.details()));

    for item in record.items() {
        output.push_str(&format!(
            "  {:<22}  {:<24}  {:>12}\n",
            item.category.label(),
            item.name,
            item.amount.format_grouped(symbol)
        ));
    }

    output.push_str(&format!(
        "\nFixed {}  Living {}  Debt {}\nMonthly total: {}\nSavings:       {}",
        summary.fixed_total().format_grouped(symbol),
        summary.living_total().format_grouped(symbol),
        summary.debt_total().format_grouped(symbol),
        summary.monthly_total().format_grouped(symbol),
        summary.savings_total().format_grouped(symbol),
    ));
    output
}
