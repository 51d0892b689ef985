//! Live item set
//!
//! The editable sheet the summary is computed from. `add`, `update` and
//! `delete` are the only mutation entry points.

use crate::error::{FundsheetError, FundsheetResult};
use crate::models::{Category, ExpenseItem, ItemId, ItemUpdate, Money};

/// The live, ordered set of expense items
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemStore {
    items: Vec<ExpenseItem>,
}

impl ItemStore {
    /// An empty sheet
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<ExpenseItem>) -> Self {
        Self { items }
    }

    /// The sheet a new user starts from
    pub fn starter() -> Self {
        let rows: [(Category, &str, i64); 10] = [
            (Category::Fixed, "Phone bill", 699),
            (Category::Fixed, "Rent", 12000),
            (Category::Fixed, "Insurance", 4583),
            (Category::Fixed, "Regular investment", 5000),
            (Category::Living, "Food", 9000),
            (Category::Living, "Household supplies", 2000),
            (Category::Living, "Transportation", 1500),
            (Category::Savings, "Emergency fund deposit", 5000),
            (Category::Savings, "Travel fund", 2000),
            (Category::LongTermDebt, "Student loan", 3500),
        ];

        Self {
            items: rows
                .into_iter()
                .map(|(category, name, units)| {
                    ExpenseItem::with_amount(category, name, Money::from_units(units))
                })
                .collect(),
        }
    }

    pub fn items(&self) -> &[ExpenseItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items of one category, in sheet order
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &ExpenseItem> {
        self.items.iter().filter(move |i| i.category == category)
    }

    pub fn get(&self, id: ItemId) -> Option<&ExpenseItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Find an item by full id, short id (`itm-xxxxxxxx`) or exact name
    /// (case-insensitive)
    pub fn find(&self, identifier: &str) -> Option<&ExpenseItem> {
        let identifier = identifier.trim();
        self.items
            .iter()
            .find(|i| i.id.matches(identifier))
            .or_else(|| {
                self.items
                    .iter()
                    .find(|i| !i.name.is_empty() && i.name.eq_ignore_ascii_case(identifier))
            })
    }

    /// Append a blank item (empty name, zero amount, included)
    pub fn add(&mut self, category: Category) -> &mut ExpenseItem {
        self.items.push(ExpenseItem::new(category));
        let last = self.items.len() - 1;
        &mut self.items[last]
    }

    /// Apply a partial update to one item
    pub fn update(&mut self, id: ItemId, update: &ItemUpdate) -> FundsheetResult<&ExpenseItem> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| FundsheetError::item_not_found(id.to_string()))?;

        item.apply(update);
        Ok(item)
    }

    /// Remove an item, returning it if it was present
    pub fn delete(&mut self, id: ItemId) -> Option<ExpenseItem> {
        let index = self.items.iter().position(|i| i.id == id)?;
        Some(self.items.remove(index))
    }
}
