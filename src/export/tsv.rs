//! Tab-separated rendering of one record for pasting into a spreadsheet
//!
//! No quoting is applied. Commas are safe; a tab inside an item name will
//! split the cell when pasted.

use crate::models::SavedRecord;

use super::rows::{record_rows, Cell, Row};

/// Render one record's row matrix as tab-separated text
pub fn render_record_tsv(record: &SavedRecord) -> String {
    render_rows_tsv(&record_rows(record))
}

/// Encode a row matrix: cells tab-joined, rows newline-joined
pub fn render_rows_tsv(rows: &[Row]) -> String {
    rows.iter()
        .map(|row| {
            row.cells
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => String::new(),
                    Cell::Text(s) => s.clone(),
                    Cell::Amount(m) => m.to_plain_string(),
                })
                .collect::<Vec<_>>()
                .join("\t")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, RecordId, SavedItem, SummaryData};

    fn record() -> SavedRecord {
        let item = |category, name: &str, units| SavedItem {
            category,
            name: name.into(),
            amount: Money::from_units(units),
        };
        SavedRecord::new(
            RecordId::from("1"),
            "2025/01/05 10:00:00",
            vec![
                item(Category::Fixed, "Rent", 12000),
                item(Category::Fixed, "Phone, mobile", 699),
                item(Category::Savings, "Emergency", 5000),
            ],
            SummaryData::default(),
        )
    }

    #[test]
    fn test_layout() {
        let text = render_record_tsv(&record());
        let lines: Vec<_> = text.split('\n').collect();
        assert_eq!(
            lines,
            vec![
                "Category\tItem\tAmount",
                "Fixed Expenses",
                "Fixed Expenses\tRent\t12000",
                "Fixed Expenses\tPhone, mobile\t699",
                "\tFixed Expenses subtotal\t12699",
                "",
                "Savings & Investments",
                "Savings & Investments\tEmergency\t5000",
                "\tSavings & Investments subtotal\t5000",
                "",
                "Total Expense\t\t12699",
                "Total Savings\t\t5000",
            ]
        );
    }

    #[test]
    fn test_no_quoting() {
        let r = SavedRecord::new(
            RecordId::from("1"),
            "d",
            vec![SavedItem {
                category: Category::Living,
                name: "\"Fancy\" food".into(),
                amount: Money::from_units(1),
            }],
            SummaryData::default(),
        );
        assert!(render_record_tsv(&r).contains("Living Budget\t\"Fancy\" food\t1"));
    }
}
