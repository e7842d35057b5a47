//! MCP stdio transport
//!
//! Framed JSON-RPC 2.0 over newline-delimited frames. `protocol` holds
//! the wire types and frame classification, `schema` converts catalog
//! definitions to JSON Schema, and `server` runs the serve loop.

pub mod protocol;
pub mod schema;
pub mod server;

pub use server::McpServer;
