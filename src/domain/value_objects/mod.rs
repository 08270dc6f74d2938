//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts: the closed
//! vocabularies offered at entry time and the non-negative `Amount`.

mod amount;
mod category;
mod priority;
mod unit;

pub use amount::{Amount, InvalidAmount, ParseAmountError};
pub use category::Category;
pub use priority::Priority;
pub use unit::Unit;
