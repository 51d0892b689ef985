//! Rollup totals for a set of expense items

use serde::{Deserialize, Serialize};

use super::money::Money;

/// Category rollups plus the monthly total
///
/// `monthly_total` is always `fixed + living + debt`; savings is reported
/// beside it, never inside it. The monthly total is derived on
/// construction and on deserialization, so it cannot drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "SummaryFields")]
pub struct SummaryData {
    fixed_total: Money,
    living_total: Money,
    debt_total: Money,
    savings_total: Money,
    monthly_total: Money,
}

/// Stored form; a stored `monthly_total` is ignored and recomputed
#[derive(Deserialize)]
struct SummaryFields {
    #[serde(default)]
    fixed_total: Money,
    #[serde(default)]
    living_total: Money,
    #[serde(default)]
    debt_total: Money,
    #[serde(default)]
    savings_total: Money,
}

impl From<SummaryFields> for SummaryData {
    fn from(f: SummaryFields) -> Self {
        Self::new(f.fixed_total, f.living_total, f.debt_total, f.savings_total)
    }
}

impl SummaryData {
    pub fn new(fixed: Money, living: Money, debt: Money, savings: Money) -> Self {
        Self {
            fixed_total: fixed,
            living_total: living,
            debt_total: debt,
            savings_total: savings,
            monthly_total: fixed + living + debt,
        }
    }

    pub fn fixed_total(&self) -> Money {
        self.fixed_total
    }

    pub fn living_total(&self) -> Money {
        self.living_total
    }

    /// Short-term and long-term debt combined
    pub fn debt_total(&self) -> Money {
        self.debt_total
    }

    pub fn savings_total(&self) -> Money {
        self.savings_total
    }

    /// Fixed + living + debt
    pub fn monthly_total(&self) -> Money {
        self.monthly_total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_excludes_savings() {
        let s = SummaryData::new(
            Money::from_units(12000),
            Money::from_units(9000),
            Money::from_units(3500),
            Money::from_units(5000),
        );
        assert_eq!(s.monthly_total(), Money::from_units(24500));
        assert_eq!(s.savings_total(), Money::from_units(5000));
    }

    #[test]
    fn test_deserialize_recomputes_monthly() {
        let json = r#"{"fixed_total":100,"living_total":200,"debt_total":300,"savings_total":50,"monthly_total":999999}"#;
        let s: SummaryData = serde_json::from_str(json).unwrap();
        assert_eq!(s.monthly_total(), Money::from_cents(600));
    }

    #[test]
    fn test_serialize_carries_monthly() {
        let s = SummaryData::new(
            Money::from_cents(1),
            Money::from_cents(2),
            Money::from_cents(3),
            Money::zero(),
        );
        let json = serde_json::to_value(s).unwrap();
        assert_eq!(json["monthly_total"], 6);
    }
}
