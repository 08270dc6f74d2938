//! PantryItem entity - one row of the pantry table

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Amount, Category, Unit};
use crate::error::{PantryError, PantryResult};

/// Something on the shelf, keyed by its (case-sensitive) name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PantryItem {
    pub name: String,
    pub category: Category,
    pub current_amount: Amount,
    pub unit: Unit,
}

impl PantryItem {
    pub fn new(
        name: impl Into<String>,
        category: Category,
        current_amount: Amount,
        unit: Unit,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            current_amount,
            unit,
        }
    }

    /// Build an item from raw form input.
    ///
    /// The name is trimmed and must not be blank; the amount must be a finite,
    /// non-negative number.
    pub fn from_form(
        name: &str,
        category: Category,
        current_amount: f64,
        unit: Unit,
    ) -> PantryResult<Self> {
        let name = require_name(name)?;
        let current_amount = Amount::new(current_amount).map_err(|e| PantryError::InvalidAmount {
            field: "Current Amount",
            value: e.0,
        })?;
        Ok(Self::new(name, category, current_amount, unit))
    }
}

/// Trimmed, non-blank item name.
pub(crate) fn require_name(name: &str) -> PantryResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(PantryError::MissingField { field: "Item Name" });
    }
    Ok(trimmed.to_string())
}

/// Partial edit of a pantry item. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemUpdate {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub current_amount: Option<f64>,
    pub unit: Option<Unit>,
}

impl ItemUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_current_amount(mut self, amount: f64) -> Self {
        self.current_amount = Some(amount);
        self
    }

    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = Some(unit);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.current_amount.is_none()
            && self.unit.is_none()
    }

    /// Produce the edited item without touching `item`.
    pub fn apply_to(&self, item: &PantryItem) -> PantryResult<PantryItem> {
        let mut edited = item.clone();
        if let Some(name) = &self.name {
            edited.name = require_name(name)?;
        }
        if let Some(category) = &self.category {
            edited.category = category.clone();
        }
        if let Some(amount) = self.current_amount {
            edited.current_amount = Amount::new(amount).map_err(|e| PantryError::InvalidAmount {
                field: "Current Amount",
                value: e.0,
            })?;
        }
        if let Some(unit) = &self.unit {
            edited.unit = unit.clone();
        }
        Ok(edited)
    }
}
