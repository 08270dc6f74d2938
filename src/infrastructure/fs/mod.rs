//! File System Implementations

mod local;

pub use local::{expand_home, LocalFs};
