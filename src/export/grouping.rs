//! Category grouping shared by every export format
//!
//! A record's items are partitioned by category in category order, empty
//! categories are dropped, and subtotals and totals are computed once here.
//! Serializers only encode the result.

use crate::models::{Category, Money, SavedItem};

/// The items of one category with their subtotal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup<'a> {
    pub category: Category,
    pub items: Vec<&'a SavedItem>,
    pub subtotal: Money,
}

/// A record's items grouped by category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedItems<'a> {
    /// Non-empty groups in category order
    pub groups: Vec<CategoryGroup<'a>>,
    /// Every group except savings
    pub expense_total: Money,
    pub savings_total: Money,
    /// All items
    pub grand_total: Money,
}

impl<'a> GroupedItems<'a> {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn group(&self, category: Category) -> Option<&CategoryGroup<'a>> {
        self.groups.iter().find(|g| g.category == category)
    }
}

/// Group items by category
pub fn group_items(items: &[SavedItem]) -> GroupedItems<'_> {
    let groups: Vec<CategoryGroup<'_>> = Category::ALL
        .into_iter()
        .filter_map(|category| {
            let members: Vec<&SavedItem> =
                items.iter().filter(|i| i.category == category).collect();
            if members.is_empty() {
                return None;
            }
            let subtotal = members.iter().map(|i| i.amount).sum();
            Some(CategoryGroup {
                category,
                items: members,
                subtotal,
            })
        })
        .collect();

    let savings_total = groups
        .iter()
        .filter(|g| g.category.is_savings())
        .map(|g| g.subtotal)
        .sum();
    let expense_total = groups
        .iter()
        .filter(|g| !g.category.is_savings())
        .map(|g| g.subtotal)
        .sum();

    GroupedItems {
        groups,
        expense_total,
        savings_total,
        grand_total: expense_total + savings_total,
    }
}
