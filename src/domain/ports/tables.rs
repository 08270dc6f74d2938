//! Table ports - abstraction over importing and exporting tables
//!
//! The domain never knows what file format a table lives in. Infrastructure
//! provides the concrete CSV implementation.

use std::path::Path;

use crate::domain::entities::{Pantry, RequirementSheet, ShoppingList};
use crate::error::PantryResult;

/// Pantry import/export.
///
/// `load` either returns a complete pantry or an error; a caller replacing
/// its pantry with the result therefore never sees a half-imported table.
pub trait PantryStore {
    fn load(&self, path: &Path) -> PantryResult<Pantry>;

    fn save(&self, path: &Path, pantry: &Pantry) -> PantryResult<()>;
}

/// Requirement sheet import/export (the scriptable planning workflow).
pub trait RequirementStore {
    fn load_requirements(&self, path: &Path) -> PantryResult<RequirementSheet>;

    fn save_requirements(&self, path: &Path, sheet: &RequirementSheet) -> PantryResult<()>;
}

/// Shopping list export. Lists are derived, so they are never imported.
pub trait ShoppingListSink {
    fn save_shopping_list(&self, path: &Path, list: &ShoppingList) -> PantryResult<()>;
}
