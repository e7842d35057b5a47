//! Use cases
//!
//! `plan` holds the pure per-tool command construction rules; `call_tool`
//! composes locator, planner, runner, and classifier into the dispatch
//! use case.

pub mod call_tool;
pub mod plan;

pub use call_tool::ToolBridge;
