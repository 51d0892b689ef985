//! Request text for the spending-advice collaborator
//!
//! Only the prompt is built here. Sending it to a text-generation service
//! is left to whatever tool the output is piped into.

use crate::models::{ExpenseItem, Money, SummaryData};

/// Build the advice request from the live sheet
///
/// Lists every included item (zero amounts too, so the reader sees the
/// whole structure) and the monthly total.
pub fn build_prompt(items: &[ExpenseItem], summary: &SummaryData, symbol: &str) -> String {
    let lines: Vec<String> = items
        .iter()
        .filter(|item| item.counts())
        .map(|item| format!("- {}: {}", display_name(&item.name), amount(item.amount, symbol)))
        .collect();

    format!(
        "I am working out my emergency fund.\n\
         My monthly spending breakdown:\n\
         {}\n\
         \n\
         Minimum monthly total: {}\n\
         \n\
         Based on this spending structure, give me 3 concrete suggestions:\n\
         1. Where spending could be trimmed\n\
         2. Risks to watch given my debt and fixed costs\n\
         3. A savings strategy\n\
         Keep the tone friendly and professional, under 200 words.",
        lines.join("\n"),
        amount(summary.monthly_total(), symbol),
    )
}

fn display_name(name: &str) -> &str {
    if name.trim().is_empty() {
        "(unnamed)"
    } else {
        name
    }
}

fn amount(money: Money, symbol: &str) -> String {
    money.format_grouped(symbol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::services::summarize;

    #[test]
    fn test_prompt_lists_included_items_and_total() {
        let mut skipped = ExpenseItem::with_amount(Category::Living, "Gym", Money::from_units(900));
        skipped.included = false;
        let items = vec![
            ExpenseItem::with_amount(Category::Fixed, "Rent", Money::from_units(12000)),
            ExpenseItem::with_amount(Category::Savings, "Emergency", Money::from_units(5000)),
            skipped,
            ExpenseItem::new(Category::Living),
        ];
        let prompt = build_prompt(&items, &summarize(&items), "$");

        assert!(prompt.contains("- Rent: $12,000\n"));
        assert!(prompt.contains("- Emergency: $5,000\n"));
        assert!(prompt.contains("- (unnamed): $0\n"));
        assert!(!prompt.contains("Gym"));
        assert!(prompt.contains("Minimum monthly total: $12,000\n"));
    }

    #[test]
    fn test_negative_amount_sign_precedes_symbol() {
        let items = vec![
            ExpenseItem::with_amount(Category::Living, "Food", Money::from_units(900)),
            ExpenseItem::with_amount(Category::Living, "Refund", Money::from_units(-1500)),
        ];
        let prompt = build_prompt(&items, &summarize(&items), "NT$");

        assert!(prompt.contains("- Refund: -NT$1,500\n"));
        assert!(prompt.contains("Minimum monthly total: -NT$600\n"));
        assert!(!prompt.contains("$-"));
    }
}
