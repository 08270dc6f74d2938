//! ShoppingList entity - the derived, read-only output table

use serde::{Deserialize, Serialize};

use crate::domain::services::{group_by_category, Categorized, CategoryGroup};
use crate::domain::value_objects::{Amount, Category, Priority, Unit};

/// Something to buy. `amount_needed` is always strictly positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListEntry {
    pub name: String,
    pub category: Category,
    pub amount_needed: Amount,
    pub unit: Unit,
    pub priority: Priority,
}

impl Categorized for ShoppingListEntry {
    fn category(&self) -> &Category {
        &self.category
    }
}

/// Ordered list produced by the deriver. It is replaced wholesale on every
/// derivation and never edited row by row.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ShoppingList {
    entries: Vec<ShoppingListEntry>,
}

impl ShoppingList {
    pub(crate) fn from_sorted(entries: Vec<ShoppingListEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ShoppingListEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ShoppingListEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&ShoppingListEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Display grouping; the list's own order is unaffected.
    pub fn group_by_category(&self) -> Vec<CategoryGroup<'_, ShoppingListEntry>> {
        group_by_category(&self.entries)
    }
}

impl<'a> IntoIterator for &'a ShoppingList {
    type Item = &'a ShoppingListEntry;
    type IntoIter = std::slice::Iter<'a, ShoppingListEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
