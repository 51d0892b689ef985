//! Summary display formatting

use crate::models::SummaryData;

/// Format the category rollups and monthly total
pub fn format_summary(summary: &SummaryData, symbol: &str) -> String {
    let rows = [
        ("Fixed", summary.fixed_total()),
        ("Living", summary.living_total()),
        ("Debt", summary.debt_total()),
    ];

    let mut output = String::new();
    for (label, amount) in rows {
        output.push_str(&format!("{:<16}{:>14}\n", label, amount.format_grouped(symbol)));
    }
    output.push_str(&format!("{:-<30}\n", ""));
    output.push_str(&format!(
        "{:<16}{:>14}\n",
        "Monthly total",
        summary.monthly_total().format_grouped(symbol)
    ));
    output.push_str(&format!(
        "{:<16}{:>14}",
        "Savings",
        summary.savings_total().format_grouped(symbol)
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_savings_listed_apart_from_monthly() {
        let summary = SummaryData::new(
            Money::from_units(12000),
            Money::from_units(9000),
            Money::from_units(3500),
            Money::from_units(5000),
        );
        let text = format_summary(&summary, "$");
        let lines: Vec<_> = text.lines().collect();

        assert!(lines[4].starts_with("Monthly total"));
        assert!(lines[4].ends_with("$24,500"));
        assert!(lines[5].ends_with("$5,000"));
    }
}
