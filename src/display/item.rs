//! Live sheet display formatting

use crate::models::{Category, ExpenseItem};
use crate::services::{category_total, ItemStore};

/// Format the sheet grouped by category, with short ids for editing
pub fn format_sheet(sheet: &ItemStore, symbol: &str) -> String {
    if sheet.is_empty() {
        return "No items on the sheet. Add one with 'fundsheet item add <category>'.".to_string();
    }

    let name_width = sheet
        .items()
        .iter()
        .map(|i| i.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();

    for category in Category::ALL {
        let items: Vec<&ExpenseItem> = sheet.in_category(category).collect();
        if items.is_empty() {
            continue;
        }

        let total = category_total(sheet.items(), category);
        output.push_str(&format!(
            "{} ({})\n",
            category.label(),
            total.format_grouped(symbol)
        ));

        for item in items {
            let marker = if item.included { "x" } else { " " };
            let name = if item.name.is_empty() { "-" } else { item.name.as_str() };
            output.push_str(&format!(
                "  [{}] {}  {:<name_width$}  {:>12}\n",
                marker,
                item.id,
                name,
                item.amount.format_grouped(symbol),
                name_width = name_width,
            ));
        }
        output.push('\n');
    }

    output.trim_end().to_string()
}

/// Format a single item
pub fn format_item_details(item: &ExpenseItem, symbol: &str) -> String {
    format!(
        "ID:       {}\nCategory: {}\nName:     {}\nAmount:   {}\nIncluded: {}",
        item.id,
        item.category.label(),
        item.name,
        item.amount.format_grouped(symbol),
        if item.included { "yes" } else { "no" },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_empty_sheet() {
        assert!(format_sheet(&ItemStore::new(), "$").starts_with("No items"));
    }

    #[test]
    fn test_groups_in_category_order() {
        let mut excluded =
            ExpenseItem::with_amount(Category::Living, "Gym", Money::from_units(900));
        excluded.included = false;
        let sheet = ItemStore::from_items(vec![
            excluded,
            ExpenseItem::with_amount(Category::Fixed, "Rent", Money::from_units(12000)),
        ]);

        let text = format_sheet(&sheet, "$");
        let fixed = text.find("Fixed Expenses ($12,000)").unwrap();
        let living = text.find("Living Budget ($0)").unwrap();
        assert!(fixed < living);
        assert!(text.contains("[ ] itm-"));
        assert!(text.contains("[x] itm-"));
        assert!(!text.contains("Savings"));
    }
}
