//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod call_logger;
pub mod process_runner;
pub mod script_locator;
