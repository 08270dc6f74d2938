//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands, PantryArg};
pub use factory::{create_needs_use_case, create_plan_use_case};
