//! Plan Use Case
//!
//! Turns a filled-in requirement sheet into a shopping list.
//!
//! This module handles:
//! - Loading the requirement sheet
//! - Deriving the list under the configured priority order
//! - Optionally exporting the list

mod options;
mod result;
mod use_case;

pub use options::PlanOptions;
pub use result::PlanResult;
pub use use_case::PlanUseCase;
