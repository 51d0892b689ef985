//! CSV export of the whole record list
//!
//! One row per saved record. Text fields are always quoted with inner
//! quotes doubled; amounts are written bare in plain decimal form. The
//! output starts with a UTF-8 byte-order mark so spreadsheet tools pick
//! the right encoding for non-Latin text.

use crate::models::SavedRecord;

use super::rows::{ledger_row, Cell};

/// Header row of the record list export
pub const CSV_HEADERS: [&str; 4] = ["Date", "Total Expense", "Total Savings", "Notes"];

/// UTF-8 byte-order mark
pub const BOM: char = '\u{feff}';

pub const CSV_MIME: &str = "text/csv;charset=utf-8";

/// A ready-to-write CSV file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvArtifact {
    pub file_name: String,
    pub mime: &'static str,
    pub contents: String,
}

/// Render every record as CSV, or `None` when there is nothing to export
pub fn render_records_csv(records: &[SavedRecord]) -> Option<String> {
    if records.is_empty() {
        return None;
    }

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(CSV_HEADERS.join(","));

    for record in records {
        let fields: Vec<String> = ledger_row(record).iter().map(encode_cell).collect();
        lines.push(fields.join(","));
    }

    let mut out = String::new();
    out.push(BOM);
    out.push_str(&lines.join("\n"));
    Some(out)
}

/// Build the CSV artifact for the record list
///
/// `date_label` is today's date as the user reads it; slashes become
/// dashes in the file name.
pub fn export_records_csv(
    records: &[SavedRecord],
    prefix: &str,
    date_label: &str,
) -> Option<CsvArtifact> {
    let contents = render_records_csv(records)?;
    Some(CsvArtifact {
        file_name: csv_file_name(prefix, date_label),
        mime: CSV_MIME,
        contents,
    })
}

/// `<prefix>_<date with '/' replaced by '-'>.csv`
pub fn csv_file_name(prefix: &str, date_label: &str) -> String {
    format!("{}_{}.csv", prefix, date_label.replace('/', "-"))
}

fn encode_cell(cell: &Cell) -> String {
    match cell {
        Cell::Empty => String::new(),
        Cell::Text(s) => quote_text(s),
        Cell::Amount(m) => m.to_plain_string(),
    }
}

/// Wrap in double quotes, doubling any inner double quote
fn quote_text(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, RecordId, SavedItem, SummaryData};

    fn record(id: &str, date: &str, items: Vec<(Category, &str, i64)>) -> SavedRecord {
        SavedRecord::new(
            RecordId::from(id),
            date,
            items
                .into_iter()
                .map(|(category, name, units)| SavedItem {
                    category,
                    name: name.into(),
                    amount: Money::from_units(units),
                })
                .collect(),
            SummaryData::default(),
        )
    }

    #[test]
    fn test_empty_list_is_nothing_to_export() {
        assert!(render_records_csv(&[]).is_none());
        assert!(export_records_csv(&[], "personal_funds", "2025/1/5").is_none());
    }

    #[test]
    fn test_layout() {
        let records = vec![
            record(
                "2",
                "2025/01/06 09:00:00",
                vec![(Category::Fixed, "Rent", 12000), (Category::Savings, "Travel", 2000)],
            ),
            record("1", "2025/01/05 09:00:00", vec![(Category::Living, "Food", 9000)]),
        ];
        let csv = render_records_csv(&records).unwrap();

        assert!(csv.starts_with('\u{feff}'));
        let body = csv.trim_start_matches('\u{feff}');
        let lines: Vec<_> = body.split('\n').collect();
        assert_eq!(
            lines,
            vec![
                "Date,Total Expense,Total Savings,Notes",
                "\"2025/01/06 09:00:00\",12000,2000,\"Rent, Travel\"",
                "\"2025/01/05 09:00:00\",9000,0,\"Food\"",
            ]
        );
    }

    #[test]
    fn test_quotes_are_doubled_and_round_trip() {
        let records = vec![record("1", "2025/01/05", vec![(Category::Fixed, "O\"Brien", 10)])];
        let csv = render_records_csv(&records).unwrap();
        assert!(csv.contains("\"O\"\"Brien\""));

        let body = csv.trim_start_matches('\u{feff}');
        let mut reader = ::csv::Reader::from_reader(body.as_bytes());
        let rows: Vec<::csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][3], "O\"Brien");
        assert_eq!(&rows[0][1], "10");
    }

    #[test]
    fn test_non_latin_text_and_commas_survive() {
        let records = vec![record(
            "1",
            "2025/1/5",
            vec![(Category::Fixed, "房租, 水電", 12000)],
        )];
        let csv = render_records_csv(&records).unwrap();
        let body = csv.trim_start_matches('\u{feff}');

        let mut reader = ::csv::Reader::from_reader(body.as_bytes());
        let row = reader.records().next().unwrap().unwrap();
        assert_eq!(&row[3], "房租, 水電");
    }

    #[test]
    fn test_fractional_amounts_are_plain_decimal() {
        let r = SavedRecord::new(
            RecordId::from("1"),
            "d",
            vec![SavedItem {
                category: Category::Living,
                name: "Coffee".into(),
                amount: Money::from_cents(123_450),
            }],
            SummaryData::default(),
        );
        let csv = render_records_csv(&[r]).unwrap();
        assert!(csv.ends_with("\"d\",1234.50,0,\"Coffee\""));
    }

    #[test]
    fn test_file_name() {
        assert_eq!(
            csv_file_name("personal_funds", "2025/1/5"),
            "personal_funds_2025-1-5.csv"
        );
        let artifact = export_records_csv(&[record("1", "d", vec![])], "p", "2025/01/05").unwrap();
        assert_eq!(artifact.file_name, "p_2025-01-05.csv");
        assert_eq!(artifact.mime, "text/csv;charset=utf-8");
    }
}
