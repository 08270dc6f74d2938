//! ShoppingListDeriver Domain Service
//!
//! Turns a requirement sheet into a shopping list:
//!
//! 1. `amount_needed = max(0, monthly_need - current_amount)` per row
//! 2. rows with nothing to buy are dropped
//! 3. the rest is stably sorted by priority (per [`PriorityOrder`]), then by
//!    category label
//!
//! Pure and deterministic: the same rows always produce the same list.

use tracing::debug;

use crate::domain::entities::{RequirementEntry, ShoppingList, ShoppingListEntry};
use crate::domain::policies::PriorityOrder;
use crate::domain::value_objects::Amount;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShoppingListDeriver {
    order: PriorityOrder,
}

impl ShoppingListDeriver {
    pub fn new(order: PriorityOrder) -> Self {
        Self { order }
    }

    pub fn order(&self) -> PriorityOrder {
        self.order
    }

    pub fn derive<'a, I>(&self, entries: I) -> ShoppingList
    where
        I: IntoIterator<Item = &'a RequirementEntry>,
    {
        let mut shoppable: Vec<ShoppingListEntry> = entries
            .into_iter()
            .filter_map(|entry| {
                let needed = amount_needed(entry);
                if needed.is_zero() {
                    debug!(item = %entry.name, "fully stocked");
                    return None;
                }
                Some(ShoppingListEntry {
                    name: entry.name.clone(),
                    category: entry.category.clone(),
                    amount_needed: needed,
                    unit: entry.unit.clone(),
                    priority: entry.priority,
                })
            })
            .collect();

        let order = self.order;
        shoppable.sort_by(|a, b| {
            order
                .compare(a.priority, b.priority)
                .then_with(|| a.category.label().cmp(b.category.label()))
        });

        debug!(
            entries = shoppable.len(),
            order = %order,
            "derived shopping list"
        );
        ShoppingList::from_sorted(shoppable)
    }
}

/// How much of `entry` must be bought to cover the month.
pub fn amount_needed(entry: &RequirementEntry) -> Amount {
    entry.monthly_need.shortfall_from(entry.current_amount)
}
