//! Domain Entities
//!
//! The three tables the application works with: the pantry, the monthly
//! requirement sheet snapshotted from it, and the derived shopping list.

mod pantry;
mod pantry_item;
mod requirement;
mod shopping_list;

pub use pantry::Pantry;
pub use pantry_item::{ItemUpdate, PantryItem};
pub use requirement::{RequirementEntry, RequirementSheet, RequirementUpdate};
pub use shopping_list::{ShoppingList, ShoppingListEntry};
