//! Command execution records and outcome classification
//!
//! [`entities`] holds the two value objects that cross the port boundary:
//! the planned command and the captured outcome. [`classifier`] turns an
//! outcome into a result envelope.

pub mod classifier;
pub mod entities;

pub use classifier::{ConflictFileSet, classify_outcome, failure_detail, parse_conflict_paths};
pub use entities::{CommandSpec, ExecutionOutcome};
