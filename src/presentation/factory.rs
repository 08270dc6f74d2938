//! Use Case Factory
//!
//! Wires use cases to the CSV table implementation.

use crate::application::{NeedsUseCase, PlanUseCase};
use crate::infrastructure::CsvTables;

pub type ConcretePlanUseCase = PlanUseCase<CsvTables>;

pub type ConcreteNeedsUseCase = NeedsUseCase<CsvTables>;

pub fn create_plan_use_case() -> ConcretePlanUseCase {
    PlanUseCase::new(CsvTables::new())
}

pub fn create_needs_use_case() -> ConcreteNeedsUseCase {
    NeedsUseCase::new(CsvTables::new())
}
