//! Plan result types

use std::path::PathBuf;

use crate::domain::entities::ShoppingList;
use crate::domain::policies::PriorityOrder;

/// Result of a plan run
#[derive(Debug, Clone, Default)]
pub struct PlanResult {
    /// Rows read from the requirement sheet
    pub requirements: usize,
    /// The derived list, in export order
    pub list: ShoppingList,
    /// Order the list was sorted under
    pub priority_order: PriorityOrder,
    /// Where the list was written, if it was
    pub exported: Option<PathBuf>,
}

impl PlanResult {
    /// Rows that were fully stocked and left off the list.
    pub fn stocked(&self) -> usize {
        self.requirements.saturating_sub(self.list.len())
    }
}
