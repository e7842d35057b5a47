//! Application layer for git-scripts-bridge
//!
//! This crate contains the static tool catalog, port definitions, and the
//! dispatch use case that turns a validated tool call into a child-process
//! invocation and a result envelope. It depends only on the domain layer.

pub mod catalog;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use catalog::bridge_catalog;
pub use ports::{
    call_logger::{CallEvent, CallLogger, NoCallLogger},
    process_runner::ProcessRunnerPort,
    script_locator::{ScriptLocateError, ScriptLocatorPort},
};
pub use use_cases::call_tool::ToolBridge;
