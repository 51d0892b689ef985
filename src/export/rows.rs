//! Format-neutral row matrix
//!
//! The per-record layout used by the clipboard and workbook exports, and
//! the per-record ledger row used by the CSV export.

use crate::models::{Money, SavedRecord};

use super::grouping::{group_items, GroupedItems};

/// Header of the per-record layout
pub const RECORD_HEADERS: [&str; 3] = ["Category", "Item", "Amount"];

pub const TOTAL_EXPENSE_LABEL: &str = "Total Expense";
pub const TOTAL_SAVINGS_LABEL: &str = "Total Savings";

/// One cell of an export row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Text(String),
    Amount(Money),
}

impl Cell {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn as_amount(&self) -> Option<Money> {
        match self {
            Self::Amount(m) => Some(*m),
            _ => None,
        }
    }
}

/// What a row represents, for formats that style rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Header,
    CategoryLabel,
    Item,
    Subtotal,
    Spacer,
    Total,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub kind: RowKind,
    pub cells: Vec<Cell>,
}

impl Row {
    fn new(kind: RowKind, cells: Vec<Cell>) -> Self {
        Self { kind, cells }
    }
}

/// Lay out grouped items:
///
/// ```text
/// Category | Item | Amount
/// <label>
/// <label>  | name | amount      (one per item)
///          | <label> subtotal | sum
/// (blank)
/// ...
/// Total Expense |  | sum
/// Total Savings |  | sum
/// ```
pub fn layout_rows(grouped: &GroupedItems<'_>) -> Vec<Row> {
    let mut rows = vec![Row::new(
        RowKind::Header,
        RECORD_HEADERS.iter().map(|h| Cell::text(*h)).collect(),
    )];

    for group in &grouped.groups {
        let label = group.category.label();

        rows.push(Row::new(RowKind::CategoryLabel, vec![Cell::text(label)]));

        for item in &group.items {
            rows.push(Row::new(
                RowKind::Item,
                vec![
                    Cell::text(label),
                    Cell::text(item.name.clone()),
                    Cell::Amount(item.amount),
                ],
            ));
        }

        rows.push(Row::new(
            RowKind::Subtotal,
            vec![
                Cell::Empty,
                Cell::text(format!("{} subtotal", label)),
                Cell::Amount(group.subtotal),
            ],
        ));
        rows.push(Row::new(RowKind::Spacer, Vec::new()));
    }

    rows.push(Row::new(
        RowKind::Total,
        vec![
            Cell::text(TOTAL_EXPENSE_LABEL),
            Cell::Empty,
            Cell::Amount(grouped.expense_total),
        ],
    ));
    rows.push(Row::new(
        RowKind::Total,
        vec![
            Cell::text(TOTAL_SAVINGS_LABEL),
            Cell::Empty,
            Cell::Amount(grouped.savings_total),
        ],
    ));

    rows
}

/// The row matrix for one record
pub fn record_rows(record: &SavedRecord) -> Vec<Row> {
    layout_rows(&group_items(record.items()))
}

/// The CSV ledger row for one record: date, total expense, total savings,
/// notes
pub fn ledger_row(record: &SavedRecord) -> Vec<Cell> {
    let grouped = group_items(record.items());
    vec![
        Cell::text(record.date()),
        Cell::Amount(grouped.expense_total),
        Cell::Amount(grouped.savings_total),
        Cell::text(record.details()),
    ]
}

/// Total expense as laid out in a row matrix
pub fn expense_total_of(rows: &[Row]) -> Option<Money> {
    rows.iter()
        .filter(|r| r.kind == RowKind::Total)
        .find(|r| r.cells.first() == Some(&Cell::text(TOTAL_EXPENSE_LABEL)))
        .and_then(|r| r.cells.last())
        .and_then(Cell::as_amount)
}
