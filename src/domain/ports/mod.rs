//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod tables;

pub use tables::{PantryStore, RequirementStore, ShoppingListSink};
