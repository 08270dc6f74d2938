//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `csv/` - CSV implementations of the table ports
//! - `fs/` - Local file system with atomic writes
//! - `logging` - tracing subscriber setup

pub mod csv;
pub mod fs;
pub mod logging;

pub use self::csv::CsvTables;
pub use fs::LocalFs;
