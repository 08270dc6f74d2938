//! Common test utilities for pantry CLI, contract and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated working directory and home, plus CLI runners
//! - Assertion macros: `assert_output_contains!`, `assert_file_lines!`
//! - Fixtures: Reusable CSV tables

#![allow(dead_code, unused_imports)]

#[macro_use]
pub mod assertions;
pub mod env;
pub mod fixtures;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
