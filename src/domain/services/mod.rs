//! Domain Services
//!
//! Stateless operations over entities.

mod grouping;
mod shopping_list_deriver;

pub use grouping::{group_by_category, Categorized, CategoryGroup};
pub use shopping_list_deriver::{amount_needed, ShoppingListDeriver};
