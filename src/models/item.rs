//! Expense item model
//!
//! A live, editable line on the budget sheet, and the frozen form it takes
//! inside a saved record.

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::ids::ItemId;
use super::money::Money;

/// An expense line on the live sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseItem {
    /// Unique identifier
    pub id: ItemId,

    pub category: Category,

    /// Free text, may be empty
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub amount: Money,

    /// Excluded items stay on the sheet but add nothing to any total
    #[serde(default = "default_included")]
    pub included: bool,
}

fn default_included() -> bool {
    true
}

impl ExpenseItem {
    /// A blank item: empty name, zero amount, included
    pub fn new(category: Category) -> Self {
        Self {
            id: ItemId::new(),
            category,
            name: String::new(),
            amount: Money::zero(),
            included: true,
        }
    }

    /// An included item with a name and amount
    pub fn with_amount(category: Category, name: impl Into<String>, amount: Money) -> Self {
        Self {
            name: name.into(),
            amount,
            ..Self::new(category)
        }
    }

    /// Whether the item adds to its category total
    pub fn counts(&self) -> bool {
        self.included
    }

    /// Whether the item is worth freezing into a saved record
    pub fn is_capturable(&self) -> bool {
        self.included && !self.amount.is_zero()
    }

    /// Apply a partial update; fields left as `None` are untouched
    pub fn apply(&mut self, update: &ItemUpdate) {
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(amount) = update.amount {
            self.amount = amount;
        }
        if let Some(included) = update.included {
            self.included = included;
        }
    }
}

/// Field-by-field changes to an expense item
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemUpdate {
    pub category: Option<Category>,
    pub name: Option<String>,
    pub amount: Option<Money>,
    pub included: Option<bool>,
}

impl ItemUpdate {
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.name.is_none()
            && self.amount.is_none()
            && self.included.is_none()
    }
}

/// An item as frozen into a saved record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedItem {
    pub category: Category,
    pub name: String,
    pub amount: Money,
}

impl From<&ExpenseItem> for SavedItem {
    fn from(item: &ExpenseItem) -> Self {
        Self {
            category: item.category,
            name: item.name.clone(),
            amount: item.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_is_blank_and_included() {
        let item = ExpenseItem::new(Category::Living);
        assert!(item.name.is_empty());
        assert!(item.amount.is_zero());
        assert!(item.included);
        assert!(!item.is_capturable());
    }

    #[test]
    fn test_apply_partial_update() {
        let mut item = ExpenseItem::with_amount(Category::Fixed, "Rent", Money::from_units(12000));
        item.apply(&ItemUpdate {
            amount: Some(Money::from_units(12500)),
            ..Default::default()
        });
        assert_eq!(item.name, "Rent");
        assert_eq!(item.amount, Money::from_units(12500));

        item.apply(&ItemUpdate {
            included: Some(false),
            name: Some(String::new()),
            ..Default::default()
        });
        assert!(!item.included);
        assert!(item.name.is_empty());
        assert_eq!(item.category, Category::Fixed);
    }

    #[test]
    fn test_missing_included_defaults_true() {
        let json = format!(
            r#"{{"id":"{}","category":"FIXED","name":"Rent","amount":100}}"#,
            ItemId::new().as_uuid()
        );
        let item: ExpenseItem = serde_json::from_str(&json).unwrap();
        assert!(item.included);
    }
}
