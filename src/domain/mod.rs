//! Domain Layer
//!
//! Pure pantry and shopping-list logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `value_objects/` - Closed vocabularies (Category, Unit, Priority) and Amount
//! - `entities/` - Pantry, RequirementSheet, ShoppingList
//! - `services/` - ShoppingListDeriver and category grouping
//! - `policies/` - PriorityOrder
//! - `ports/` - Table import/export boundaries implemented by infrastructure

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
