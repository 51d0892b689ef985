//! Record capture
//!
//! Turns the live sheet plus its summary into a frozen `SavedRecord`.
//! Capture does not insert into the repository; that is a separate step.

use std::fmt::Write;

use chrono::{DateTime, Local, TimeZone};

use crate::models::{ExpenseItem, RecordId, SavedItem, SavedRecord, SummaryData};

/// Fallback when the configured format cannot be rendered
const FALLBACK_DATE_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Builds saved records, stamping them with a formatted capture date
#[derive(Debug, Clone)]
pub struct RecordFactory {
    date_format: String,
}

impl Default for RecordFactory {
    fn default() -> Self {
        Self::new(FALLBACK_DATE_FORMAT)
    }
}

impl RecordFactory {
    pub fn new(date_format: impl Into<String>) -> Self {
        Self {
            date_format: date_format.into(),
        }
    }

    /// Capture a record stamped with the current local time
    pub fn capture(&self, items: &[ExpenseItem], summary: &SummaryData) -> SavedRecord {
        self.capture_at(items, summary, Local::now())
    }

    /// Capture a record stamped with `now`
    ///
    /// Only included, non-zero items are frozen. The summary is copied
    /// verbatim.
    pub fn capture_at<Tz>(
        &self,
        items: &[ExpenseItem],
        summary: &SummaryData,
        now: DateTime<Tz>,
    ) -> SavedRecord
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let frozen: Vec<SavedItem> = items
            .iter()
            .filter(|i| i.is_capturable())
            .map(SavedItem::from)
            .collect();

        SavedRecord::new(
            RecordId::generate(),
            format_timestamp(&now, &self.date_format),
            frozen,
            *summary,
        )
    }
}

/// Render a timestamp, falling back to the default format when the
/// configured one is invalid
pub fn format_timestamp<Tz>(now: &DateTime<Tz>, format: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut out = String::new();
    if write!(out, "{}", now.format(format)).is_ok() {
        return out;
    }

    tracing::warn!(date_format = format, "Invalid date format, using default");
    now.format(FALLBACK_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ItemUpdate, Money};
    use crate::services::{summarize, ItemStore};
    use chrono::Utc;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 5, 15, 4, 5).unwrap()
    }

    #[test]
    fn test_capture_freezes_included_non_zero_items() {
        let mut store = ItemStore::starter();
        let blank = store.add(Category::Living).id;
        let gym = store.add(Category::Fixed).id;
        store
            .update(
                gym,
                &ItemUpdate {
                    name: Some("Gym".into()),
                    amount: Some(Money::from_units(800)),
                    included: Some(false),
                    ..Default::default()
                },
            )
            .unwrap();

        let summary = summarize(store.items());
        let record = RecordFactory::default().capture_at(store.items(), &summary, fixed_time());

        assert_eq!(record.items().len(), 10);
        assert!(record.items().iter().all(|i| i.name != "Gym"));
        assert!(store.get(blank).is_some());
        assert_eq!(record.summary(), &summary);
        assert_eq!(record.date(), "2025/01/05 15:04:05");
    }

    #[test]
    fn test_record_independent_of_later_edits() {
        let mut store = ItemStore::starter();
        let summary = summarize(store.items());
        let record = RecordFactory::default().capture_at(store.items(), &summary, fixed_time());
        let snapshot = record.clone();

        let rent = store.find("Rent").unwrap().id;
        store
            .update(
                rent,
                &ItemUpdate {
                    amount: Some(Money::from_units(99999)),
                    ..Default::default()
                },
            )
            .unwrap();
        let food = store.find("Food").unwrap().id;
        store.delete(food);
        store.add(Category::ShortTermDebt);

        assert_eq!(record, snapshot);
        assert_eq!(record.summary().fixed_total(), Money::from_units(22282));
        assert!(record.items().iter().any(|i| i.name == "Food"));
    }

    #[test]
    fn test_custom_and_invalid_date_formats() {
        let summary = SummaryData::default();
        let record = RecordFactory::new("%d-%m-%Y").capture_at(&[], &summary, fixed_time());
        assert_eq!(record.date(), "05-01-2025");

        let record = RecordFactory::new("%Q %Y").capture_at(&[], &summary, fixed_time());
        assert_eq!(record.date(), "2025/01/05 15:04:05");
    }

    #[test]
    fn test_consecutive_captures_get_distinct_ids() {
        let factory = RecordFactory::default();
        let a = factory.capture(&[], &SummaryData::default());
        let b = factory.capture(&[], &SummaryData::default());
        assert_ne!(a.id(), b.id());
    }
}
