//! Strongly-typed ID wrappers
//!
//! Expense items carry random UUIDs; saved records carry time-derived
//! tokens so that their ids sort in capture order.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicI64, Ordering};
use uuid::Uuid;

/// Identifier of an expense item on the live sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    const PREFIX: &'static str = "itm-";

    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Short form shown in listings, e.g. `itm-1a2b3c4d`
    pub fn short(&self) -> String {
        format!("{}{}", Self::PREFIX, &self.0.simple().to_string()[..8])
    }

    /// Whether `identifier` names this id, either in full or in short form
    pub fn matches(&self, identifier: &str) -> bool {
        let identifier = identifier.trim();
        identifier == self.0.to_string() || identifier == self.short()
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short())
    }
}

impl FromStr for ItemId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix(Self::PREFIX).unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Last issued record token, for strict monotonicity within a process
static LAST_RECORD_TOKEN: AtomicI64 = AtomicI64::new(0);

/// Identifier of a saved record: epoch milliseconds at capture time
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Generate a fresh token, strictly greater than any issued before in
    /// this process
    pub fn generate() -> Self {
        let now = Utc::now().timestamp_millis();
        let mut last = LAST_RECORD_TOKEN.load(Ordering::Relaxed);
        loop {
            let next = now.max(last + 1);
            match LAST_RECORD_TOKEN.compare_exchange_weak(
                last,
                next,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return Self(next.to_string()),
                Err(actual) => last = actual,
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self(s.trim().to_string())
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_display() {
        let id = ItemId::new();
        let display = id.to_string();
        assert!(display.starts_with("itm-"));
        assert_eq!(display.len(), 12);
    }

    #[test]
    fn test_item_id_matches_full_and_short() {
        let id = ItemId::new();
        assert!(id.matches(&id.as_uuid().to_string()));
        assert!(id.matches(&id.short()));
        assert!(!id.matches("itm-"));
        assert!(!id.matches(&ItemId::new().short()));
    }

    #[test]
    fn test_item_id_parse() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: ItemId = uuid_str.parse().unwrap();
        assert_eq!(id.as_uuid().to_string(), uuid_str);
        assert_eq!(id.short(), "itm-550e8400");
    }

    #[test]
    fn test_item_id_serialization() {
        let id = ItemId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: ItemId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_record_ids_strictly_increase() {
        let ids: Vec<i64> = (0..50)
            .map(|_| RecordId::generate().as_str().parse().unwrap())
            .collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_record_id_serializes_as_string() {
        let id = RecordId::from("1736000000000");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"1736000000000\"");
    }
}
