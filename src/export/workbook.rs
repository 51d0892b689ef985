//! Workbook (.xlsx) export of one record
//!
//! Writes the shared row matrix into a single worksheet. Header, category
//! label, subtotal and total rows are bold; amounts are numeric cells.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, Worksheet};

use crate::error::{FundsheetError, FundsheetResult};
use crate::models::{Money, SavedRecord};

use super::rows::{record_rows, Cell, Row, RowKind};

pub const SHEET_NAME: &str = "Budget";

const AMOUNT_FORMAT: &str = "#,##0.##";

/// Destination for matrix cells
trait CellWriter {
    fn text(&mut self, row: u32, col: u16, text: &str, kind: RowKind) -> FundsheetResult<()>;
    fn amount(&mut self, row: u32, col: u16, amount: Money, kind: RowKind) -> FundsheetResult<()>;
}

fn is_emphasised(kind: RowKind) -> bool {
    matches!(
        kind,
        RowKind::Header | RowKind::CategoryLabel | RowKind::Subtotal | RowKind::Total
    )
}

fn write_rows<W: CellWriter>(writer: &mut W, rows: &[Row]) -> FundsheetResult<()> {
    for (r, row) in rows.iter().enumerate() {
        let r = u32::try_from(r)
            .map_err(|_| FundsheetError::Export("Too many rows for a worksheet".into()))?;

        for (c, cell) in row.cells.iter().enumerate() {
            let c = u16::try_from(c)
                .map_err(|_| FundsheetError::Export("Too many columns for a worksheet".into()))?;

            match cell {
                Cell::Empty => {}
                Cell::Text(s) => writer.text(r, c, s, row.kind)?,
                Cell::Amount(m) => writer.amount(r, c, *m, row.kind)?,
            }
        }
    }
    Ok(())
}

struct XlsxSheet<'a> {
    sheet: &'a mut Worksheet,
    bold: Format,
    amount: Format,
    bold_amount: Format,
}

impl<'a> XlsxSheet<'a> {
    fn new(sheet: &'a mut Worksheet) -> Self {
        Self {
            sheet,
            bold: Format::new().set_bold(),
            amount: Format::new().set_num_format(AMOUNT_FORMAT),
            bold_amount: Format::new().set_bold().set_num_format(AMOUNT_FORMAT),
        }
    }
}

impl CellWriter for XlsxSheet<'_> {
    fn text(&mut self, row: u32, col: u16, text: &str, kind: RowKind) -> FundsheetResult<()> {
        if is_emphasised(kind) {
            self.sheet
                .write_string_with_format(row, col, text, &self.bold)?;
        } else {
            self.sheet.write_string(row, col, text)?;
        }
        Ok(())
    }

    fn amount(&mut self, row: u32, col: u16, amount: Money, kind: RowKind) -> FundsheetResult<()> {
        let format = if is_emphasised(kind) {
            &self.bold_amount
        } else {
            &self.amount
        };
        self.sheet
            .write_number_with_format(row, col, amount.as_f64(), format)?;
        Ok(())
    }
}

/// Build an in-memory workbook for one record
pub fn build_workbook(record: &SavedRecord) -> FundsheetResult<Workbook> {
    let rows = record_rows(record);
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;
    sheet.set_column_width(0, 24.0)?;
    sheet.set_column_width(1, 32.0)?;
    sheet.set_column_width(2, 14.0)?;
    write_rows(&mut XlsxSheet::new(sheet), &rows)?;

    Ok(workbook)
}

/// Encode one record as .xlsx bytes
pub fn workbook_bytes(record: &SavedRecord) -> FundsheetResult<Vec<u8>> {
    let mut workbook = build_workbook(record)?;
    Ok(workbook.save_to_buffer()?)
}

/// Write one record as an .xlsx file
pub fn save_workbook<P: AsRef<Path>>(record: &SavedRecord, path: P) -> FundsheetResult<()> {
    let mut workbook = build_workbook(record)?;
    workbook.save(path.as_ref())?;
    tracing::info!(path = %path.as_ref().display(), "Workbook written");
    Ok(())
}

/// `<prefix>_<record date without path separators or colons>.xlsx`
pub fn workbook_file_name(prefix: &str, record_date: &str) -> String {
    let date: String = record_date
        .chars()
        .filter(|c| !matches!(c, '/' | '\\' | ':'))
        .collect();
    format!("{}_{}.xlsx", prefix, date)
}
