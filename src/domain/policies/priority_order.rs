//! Priority ordering policy for the shopping list
//!
//! Two orderings exist:
//!
//! - `Label`: priorities compared by their label text, so `High` < `Low` <
//!   `Medium`. This is how shopping lists have always been sorted.
//! - `Severity`: `High` < `Medium` < `Low`.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Priority;

/// Named sort policy for priorities.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PriorityOrder {
    /// Lexicographic on the label: High, Low, Medium
    #[default]
    Label,
    /// Most urgent first: High, Medium, Low
    Severity,
}

impl PriorityOrder {
    pub const NAMES: &'static [&'static str] = &["label", "severity"];

    /// Sort rank of `priority` under this policy (lower sorts first).
    pub fn rank(self, priority: Priority) -> u8 {
        match (self, priority) {
            (PriorityOrder::Label, Priority::High) => 0,
            (PriorityOrder::Label, Priority::Low) => 1,
            (PriorityOrder::Label, Priority::Medium) => 2,
            (PriorityOrder::Severity, Priority::High) => 0,
            (PriorityOrder::Severity, Priority::Medium) => 1,
            (PriorityOrder::Severity, Priority::Low) => 2,
        }
    }

    pub fn compare(self, a: Priority, b: Priority) -> Ordering {
        self.rank(a).cmp(&self.rank(b))
    }

    pub fn name(self) -> &'static str {
        match self {
            PriorityOrder::Label => "label",
            PriorityOrder::Severity => "severity",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown priority order '{0}' (expected label or severity)")]
pub struct UnknownPriorityOrder(pub String);

impl std::str::FromStr for PriorityOrder {
    type Err = UnknownPriorityOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "label" => Ok(PriorityOrder::Label),
            "severity" => Ok(PriorityOrder::Severity),
            other => Err(UnknownPriorityOrder(other.to_string())),
        }
    }
}

impl std::fmt::Display for PriorityOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
