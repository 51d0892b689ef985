//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Provides safe arithmetic operations and formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use fundsheet_cli::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.cents(), 1050);
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole currency units
    ///
    /// # Examples
    /// ```
    /// use fundsheet_cli::models::Money;
    /// assert_eq!(Money::from_units(12000).cents(), 1_200_000);
    /// ```
    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// The amount as a floating point number of units, for spreadsheet cells
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10", "1,200.5"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();

        let (negative, rest) = if let Some(stripped) = trimmed.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, trimmed)
        };

        let rest = rest.strip_prefix('$').unwrap_or(rest);
        let digits: String = rest.chars().filter(|c| *c != ',').collect();
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        let (whole, frac) = digits.split_once('.').unwrap_or((digits.as_str(), ""));
        if !is_digits(whole) || !is_digits(frac) || (whole.is_empty() && frac.is_empty()) {
            return Err(invalid());
        }

        let units: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };

        // Pad or truncate cents to 2 digits
        let cents: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => frac[..2].parse().map_err(|_| invalid())?,
        };

        let cents = units
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Parse user input, treating anything unparseable as zero
    pub fn parse_or_zero(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    /// Plain decimal form for machine-readable output: no symbol, no
    /// grouping, fractional part only when present ("12000", "12000.50")
    pub fn to_plain_string(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let units = self.units().abs();
        if self.cents_part() == 0 {
            format!("{}{}", sign, units)
        } else {
            format!("{}{}.{:02}", sign, units, self.cents_part())
        }
    }

    /// Display form with a currency symbol and thousands separators
    /// ("$12,000", "-$1,234.50")
    pub fn format_grouped(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let units = group_thousands(self.units().unsigned_abs());
        if self.cents_part() == 0 {
            format!("{}{}{}", sign, symbol, units)
        } else {
            format!("{}{}{}.{:02}", sign, symbol, units, self.cents_part())
        }
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-${}.{:02}", self.units().abs(), self.cents_part())
        } else {
            write!(f, "${}.{:02}", self.units(), self.cents_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.units(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse(".5").unwrap().cents(), 50);
        assert_eq!(Money::parse("1,200").unwrap().cents(), 120_000);
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("").is_err());
        assert!(Money::parse("--5").is_err());
        assert!(Money::parse("--3.5").is_err());
        assert!(Money::parse("+5").is_err());
        assert!(Money::parse("-$-5").is_err());
        assert!(Money::parse("5.-1").is_err());
    }

    #[test]
    fn test_parse_rejects_amounts_too_large_for_cents() {
        assert!(Money::parse("99999999999999999").is_err());
        assert!(Money::parse("-99999999999999999.99").is_err());
        assert_eq!(Money::parse_or_zero("99999999999999999"), Money::zero());
        assert_eq!(
            Money::parse("92233720368547758").unwrap().cents(),
            9_223_372_036_854_775_800
        );
    }

    #[test]
    fn test_parse_or_zero_coerces_garbage() {
        assert_eq!(Money::parse_or_zero("twelve"), Money::zero());
        assert_eq!(Money::parse_or_zero(""), Money::zero());
        assert_eq!(Money::parse_or_zero("699"), Money::from_units(699));
    }

    #[test]
    fn test_plain_string() {
        assert_eq!(Money::from_units(12000).to_plain_string(), "12000");
        assert_eq!(Money::from_cents(1_200_050).to_plain_string(), "12000.50");
        assert_eq!(Money::from_cents(-50).to_plain_string(), "-0.50");
        assert_eq!(Money::zero().to_plain_string(), "0");
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(Money::from_units(24500).format_grouped("$"), "$24,500");
        assert_eq!(Money::from_units(999).format_grouped("$"), "$999");
        assert_eq!(
            Money::from_cents(123_456_789).format_grouped("$"),
            "$1,234,567.89"
        );
        assert_eq!(Money::from_units(-1000).format_grouped("NT$"), "-NT$1,000");
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let by_ref: Money = amounts.iter().sum();
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 600);
        assert_eq!(by_ref, total);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
