//! Rollup of the live sheet into category totals

use crate::models::{Category, ExpenseItem, Money, SummaryData};

/// Sum the included amounts of one category
pub fn category_total(items: &[ExpenseItem], category: Category) -> Money {
    items
        .iter()
        .filter(|i| i.category == category && i.counts())
        .map(|i| i.amount)
        .sum()
}

/// Compute the summary for an item set
///
/// Excluded items contribute nothing. Debt is short-term plus long-term;
/// savings stays out of the monthly total.
pub fn summarize(items: &[ExpenseItem]) -> SummaryData {
    let fixed = category_total(items, Category::Fixed);
    let living = category_total(items, Category::Living);
    let savings = category_total(items, Category::Savings);
    let debt = Category::ALL
        .into_iter()
        .filter(Category::is_debt)
        .map(|category| category_total(items, category))
        .sum();

    SummaryData::new(fixed, living, debt, savings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(category: Category, name: &str, units: i64) -> ExpenseItem {
        ExpenseItem::with_amount(category, name, Money::from_units(units))
    }

    #[test]
    fn test_reference_scenario() {
        let items = vec![
            item(Category::Fixed, "Rent", 12000),
            item(Category::Living, "Food", 9000),
            item(Category::Savings, "Emergency", 5000),
            item(Category::LongTermDebt, "Loan", 3500),
        ];
        let s = summarize(&items);

        assert_eq!(s.fixed_total(), Money::from_units(12000));
        assert_eq!(s.living_total(), Money::from_units(9000));
        assert_eq!(s.debt_total(), Money::from_units(3500));
        assert_eq!(s.savings_total(), Money::from_units(5000));
        assert_eq!(s.monthly_total(), Money::from_units(24500));
    }

    #[test]
    fn test_empty_is_all_zero() {
        assert_eq!(summarize(&[]), SummaryData::default());
    }

    #[test]
    fn test_excluded_and_zero_items_are_inert() {
        let mut excluded = item(Category::Fixed, "Gym", 800);
        excluded.included = false;
        let items = vec![
            item(Category::Fixed, "Rent", 12000),
            excluded,
            item(Category::Living, "Spare", 0),
        ];
        let s = summarize(&items);
        assert_eq!(s.fixed_total(), Money::from_units(12000));
        assert_eq!(s.living_total(), Money::zero());
        assert_eq!(s.monthly_total(), Money::from_units(12000));
    }

    #[test]
    fn test_debt_combines_short_and_long() {
        let items = vec![
            item(Category::ShortTermDebt, "Card", 1000),
            item(Category::LongTermDebt, "Mortgage", 20000),
        ];
        let s = summarize(&items);
        assert_eq!(s.debt_total(), Money::from_units(21000));
        assert_eq!(s.monthly_total(), Money::from_units(21000));
        assert_eq!(s.fixed_total() + s.living_total(), Money::zero());
    }

    #[test]
    fn test_negative_amounts_reduce_totals() {
        let items = vec![
            item(Category::Living, "Food", 9000),
            item(Category::Living, "Refund", -500),
        ];
        assert_eq!(summarize(&items).living_total(), Money::from_units(8500));
    }

    #[test]
    fn test_monthly_identity_over_many_sets() {
        let categories = Category::ALL;
        for n in 0..40i64 {
            let items: Vec<_> = (0..n)
                .map(|k| {
                    let mut it = item(categories[(k % 5) as usize], "x", k * 37 % 1000);
                    it.included = k % 3 != 0;
                    it
                })
                .collect();
            let s = summarize(&items);
            assert_eq!(
                s.monthly_total(),
                s.fixed_total() + s.living_total() + s.debt_total()
            );
        }
    }
}
