//! Infrastructure layer for git-scripts-bridge
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: script resolution on the filesystem, child-process
//! execution via tokio, the MCP stdio transport, configuration file
//! loading, and the JSONL audit logger.

pub mod config;
pub mod exec;
pub mod logging;
pub mod mcp;
pub mod scripts;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileLoggingConfig, FileScriptsConfig};
pub use exec::TokioProcessRunner;
pub use logging::JsonlCallLogger;
pub use mcp::{schema::tool_to_schema, server::McpServer};
pub use scripts::{InstallRootLocator, SENTINEL_SCRIPT};
