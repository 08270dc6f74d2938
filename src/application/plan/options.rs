//! Plan options

use std::path::PathBuf;

use crate::domain::policies::PriorityOrder;

/// Options for the plan command
#[derive(Debug, Clone, Default)]
pub struct PlanOptions {
    /// Where to write the shopping list CSV (None = display only)
    pub output: Option<PathBuf>,
    /// How priorities rank against each other
    pub priority_order: PriorityOrder,
}

impl PlanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    pub fn with_priority_order(mut self, order: PriorityOrder) -> Self {
        self.priority_order = order;
        self
    }
}
