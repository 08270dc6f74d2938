//! Domain Policies
//!
//! Business rules that govern behavior, kept as explicit named values so they
//! can be configured and tested.

mod priority_order;

pub use priority_order::{PriorityOrder, UnknownPriorityOrder};
