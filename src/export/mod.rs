//! Export engine
//!
//! Every format consumes the same grouping step:
//! - CSV: the whole record list, one ledger row per record
//! - TSV: one record's row matrix, for the clipboard
//! - Workbook: one record's row matrix as an .xlsx sheet

pub mod clipboard;
pub mod csv;
pub mod grouping;
pub mod rows;
pub mod tsv;
pub mod workbook;

pub use clipboard::{copy_record, ClipboardSink, CommandClipboard, CopyNotice, WriterClipboard};
pub use csv::{csv_file_name, export_records_csv, render_records_csv, CsvArtifact};
pub use grouping::{group_items, CategoryGroup, GroupedItems};
pub use rows::{layout_rows, ledger_row, record_rows, Cell, Row, RowKind};
pub use tsv::render_record_tsv;
pub use workbook::{build_workbook, save_workbook, workbook_bytes, workbook_file_name};
