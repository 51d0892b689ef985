//! Expense categories
//!
//! The category set is closed and its declaration order is the order in
//! which grouped output lists categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five fixed expense classifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// Rent, phone, insurance and other fixed commitments
    Fixed,
    /// Day-to-day living budget
    Living,
    /// Money set aside: savings, investments
    Savings,
    /// Short-term debt repayments
    ShortTermDebt,
    /// Long-term debt repayments
    LongTermDebt,
}

impl Category {
    /// All categories in output order
    pub const ALL: [Category; 5] = [
        Category::Fixed,
        Category::Living,
        Category::Savings,
        Category::ShortTermDebt,
        Category::LongTermDebt,
    ];

    /// Human-readable label used in exports and listings
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fixed => "Fixed Expenses",
            Self::Living => "Living Budget",
            Self::Savings => "Savings & Investments",
            Self::ShortTermDebt => "Short-term Debt",
            Self::LongTermDebt => "Long-term Debt",
        }
    }

    /// Command-line spelling
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Living => "living",
            Self::Savings => "savings",
            Self::ShortTermDebt => "short-term-debt",
            Self::LongTermDebt => "long-term-debt",
        }
    }

    /// Whether the category is money set aside rather than spent
    pub fn is_savings(&self) -> bool {
        matches!(self, Self::Savings)
    }

    pub fn is_debt(&self) -> bool {
        matches!(self, Self::ShortTermDebt | Self::LongTermDebt)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned for text that names no category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown category '{}' (expected one of: {})",
            self.0,
            Category::ALL
                .iter()
                .map(|c| c.slug())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Category::ALL
            .into_iter()
            .find(|c| c.slug() == normalized)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
