//! Domain layer for git-scripts-bridge
//!
//! This crate contains the pure types and logic of the bridge: the tool
//! catalog, tool calls and their validation, command specifications, and
//! the classification of child-process outcomes into result envelopes.
//! It has no dependencies on infrastructure concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Envelope
//!
//! Every tool call produces exactly one [`ResultEnvelope`]: a boolean
//! error flag plus a text payload. Success and failure share the same
//! shape; nothing else ever crosses the transport boundary.
//!
//! ## Command planning vs. execution
//!
//! A [`CommandSpec`] is a pure, deterministic description of what to run
//! (argv plus optional stdin). Executing it and capturing the
//! [`ExecutionOutcome`] is an infrastructure concern.

pub mod core;
pub mod exec;
pub mod tool;

// Re-export commonly used types
pub use core::error::BridgeError;
pub use exec::{
    classifier::{ConflictFileSet, classify_outcome, failure_detail, parse_conflict_paths},
    entities::{CommandSpec, ExecutionOutcome},
};
pub use tool::{
    entities::{ToolCall, ToolCatalog, ToolDefinition, ToolParameter},
    traits::{DefaultToolValidator, ToolValidator},
    value_objects::ResultEnvelope,
};
