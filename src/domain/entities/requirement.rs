//! Requirement entities - the monthly targets sheet
//!
//! A [`RequirementSheet`] is a one-way copy of the pantry taken when the user
//! starts planning. Later pantry edits do not flow into an existing sheet.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Pantry, PantryItem};
use crate::domain::services::{group_by_category, Categorized, CategoryGroup};
use crate::domain::value_objects::{Amount, Category, Priority, Unit};
use crate::error::{PantryError, PantryResult};

/// One pantry row plus how much of it the household needs each month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementEntry {
    pub name: String,
    pub category: Category,
    pub current_amount: Amount,
    pub unit: Unit,
    pub monthly_need: Amount,
    pub priority: Priority,
}

impl RequirementEntry {
    /// Fresh entry for `item`: no monthly need, medium priority.
    pub fn from_item(item: &PantryItem) -> Self {
        Self {
            name: item.name.clone(),
            category: item.category.clone(),
            current_amount: item.current_amount,
            unit: item.unit.clone(),
            monthly_need: Amount::ZERO,
            priority: Priority::default(),
        }
    }
}

impl Categorized for RequirementEntry {
    fn category(&self) -> &Category {
        &self.category
    }
}

/// Edit of one requirement row. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequirementUpdate {
    pub monthly_need: Option<f64>,
    pub priority: Option<Priority>,
    pub unit: Option<Unit>,
}

impl RequirementUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_monthly_need(mut self, need: f64) -> Self {
        self.monthly_need = Some(need);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = Some(unit);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequirementSheet {
    entries: Vec<RequirementEntry>,
}

impl RequirementSheet {
    /// Copy every pantry row into a new sheet, in pantry order.
    pub fn snapshot(pantry: &Pantry) -> Self {
        Self {
            entries: pantry.iter().map(RequirementEntry::from_item).collect(),
        }
    }

    pub fn from_entries(entries: Vec<RequirementEntry>) -> PantryResult<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.name.as_str()) {
                return Err(PantryError::DuplicateItem {
                    name: entry.name.clone(),
                });
            }
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[RequirementEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RequirementEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&RequirementEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Apply `update` to the named row; all-or-nothing.
    pub fn update(
        &mut self,
        name: &str,
        update: &RequirementUpdate,
    ) -> PantryResult<&RequirementEntry> {
        let index = self
            .entries
            .iter()
            .position(|e| e.name == name)
            .ok_or_else(|| PantryError::ItemNotFound {
                name: name.to_string(),
            })?;

        let monthly_need = match update.monthly_need {
            Some(value) => Amount::new(value).map_err(|e| PantryError::InvalidAmount {
                field: "Monthly Need",
                value: e.0,
            })?,
            None => self.entries[index].monthly_need,
        };

        let entry = &mut self.entries[index];
        entry.monthly_need = monthly_need;
        if let Some(priority) = update.priority {
            entry.priority = priority;
        }
        if let Some(unit) = &update.unit {
            entry.unit = unit.clone();
        }
        Ok(&self.entries[index])
    }

    pub fn group_by_category(&self) -> Vec<CategoryGroup<'_, RequirementEntry>> {
        group_by_category(&self.entries)
    }
}
