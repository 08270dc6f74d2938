//! Plan Use Case
//!
//! Orchestrates load -> derive -> export.

use std::path::Path;

use tracing::info;

use crate::domain::ports::{RequirementStore, ShoppingListSink};
use crate::domain::services::ShoppingListDeriver;
use crate::error::{PantryError, PantryResult};

use super::options::PlanOptions;
use super::result::PlanResult;

/// Plan use case - derives a shopping list from a requirement sheet file
pub struct PlanUseCase<T>
where
    T: RequirementStore + ShoppingListSink,
{
    tables: T,
}

impl<T> PlanUseCase<T>
where
    T: RequirementStore + ShoppingListSink,
{
    pub fn new(tables: T) -> Self {
        Self { tables }
    }

    pub fn execute(&self, needs_path: &Path, options: &PlanOptions) -> PantryResult<PlanResult> {
        let sheet = self.tables.load_requirements(needs_path)?;
        if sheet.is_empty() {
            return Err(PantryError::NoRequirements);
        }

        let list = ShoppingListDeriver::new(options.priority_order).derive(sheet.entries());

        let exported = match &options.output {
            Some(path) => {
                self.tables.save_shopping_list(path, &list)?;
                info!(file = %path.display(), entries = list.len(), "exported shopping list");
                Some(path.clone())
            }
            None => None,
        };

        Ok(PlanResult {
            requirements: sheet.len(),
            list,
            priority_order: options.priority_order,
            exported,
        })
    }
}
