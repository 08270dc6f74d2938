//! Pantry - household inventory tracking and monthly shopping lists
//!
//! Keep a table of what is on the shelf, snapshot it into a sheet of monthly
//! requirements, and derive a prioritised shopping list from the difference.
//!
//! ## Layers
//!
//! - `domain` - entities, value objects, the shopping list deriver
//! - `application` - the interactive `Session` and file-based use cases
//! - `infrastructure` - CSV tables, atomic writes, logging
//! - `presentation` - CLI parsing and use case wiring

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::Session;
pub use config::Config;
pub use domain::entities::{
    ItemUpdate, Pantry, PantryItem, RequirementEntry, RequirementSheet, RequirementUpdate,
    ShoppingList, ShoppingListEntry,
};
pub use domain::policies::PriorityOrder;
pub use domain::services::ShoppingListDeriver;
pub use domain::value_objects::{Amount, Category, Priority, Unit};
pub use error::{PantryError, PantryResult};
pub use infrastructure::CsvTables;
