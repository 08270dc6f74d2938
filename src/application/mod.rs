//! Application Layer
//!
//! Orchestrates the domain for the two front ends:
//! - `Session` - in-memory state behind the interactive menu
//! - `NeedsUseCase` / `PlanUseCase` - the file-based, scriptable workflow
//!
//! Business rules live in the domain; this layer only sequences them and
//! talks to the table ports.

pub mod file_names;
pub mod needs;
pub mod plan;
pub mod session;

pub use needs::{NeedsResult, NeedsUseCase};
pub use plan::{PlanOptions, PlanResult, PlanUseCase};
pub use session::Session;
