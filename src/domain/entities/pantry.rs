//! Pantry entity - the inventory table
//!
//! An ordered table of [`PantryItem`]s. Row order is insertion order (or file
//! order after an import) and is what gets exported. Names are unique.

use std::collections::HashSet;

use crate::domain::entities::{ItemUpdate, PantryItem};
use crate::domain::services::{group_by_category, Categorized, CategoryGroup};
use crate::domain::value_objects::Category;
use crate::error::{PantryError, PantryResult};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pantry {
    items: Vec<PantryItem>,
}

impl Pantry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pantry from rows, rejecting repeated names.
    pub fn from_items(items: Vec<PantryItem>) -> PantryResult<Self> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.name.as_str()) {
                return Err(PantryError::DuplicateItem {
                    name: item.name.clone(),
                });
            }
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[PantryItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PantryItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&PantryItem> {
        self.items.iter().find(|i| i.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(|i| i.name.as_str()).collect()
    }

    /// Append a new item at the end of the table.
    pub fn insert(&mut self, item: PantryItem) -> PantryResult<()> {
        if self.contains(&item.name) {
            return Err(PantryError::DuplicateItem { name: item.name });
        }
        self.items.push(item);
        Ok(())
    }

    /// Edit the named item in place. The row keeps its position.
    pub fn update(&mut self, name: &str, update: &ItemUpdate) -> PantryResult<&PantryItem> {
        let index = self.index_of(name)?;
        let edited = update.apply_to(&self.items[index])?;

        if edited.name != name && self.contains(&edited.name) {
            return Err(PantryError::DuplicateItem { name: edited.name });
        }

        self.items[index] = edited;
        Ok(&self.items[index])
    }

    pub fn remove(&mut self, name: &str) -> PantryResult<PantryItem> {
        let index = self.index_of(name)?;
        Ok(self.items.remove(index))
    }

    /// Rows grouped for display; categories sorted by label.
    pub fn group_by_category(&self) -> Vec<CategoryGroup<'_, PantryItem>> {
        group_by_category(&self.items)
    }

    fn index_of(&self, name: &str) -> PantryResult<usize> {
        self.items
            .iter()
            .position(|i| i.name == name)
            .ok_or_else(|| PantryError::ItemNotFound {
                name: name.to_string(),
            })
    }
}

impl Categorized for PantryItem {
    fn category(&self) -> &Category {
        &self.category
    }
}

impl<'a> IntoIterator for &'a Pantry {
    type Item = &'a PantryItem;
    type IntoIter = std::slice::Iter<'a, PantryItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
