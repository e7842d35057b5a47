//! Tool domain module
//!
//! Types describing the static tool catalog, inbound tool calls, their
//! validation, and the result envelope returned for every call.

pub mod entities;
pub mod traits;
pub mod value_objects;

pub use entities::{ToolCall, ToolCatalog, ToolDefinition, ToolParameter};
pub use traits::{DefaultToolValidator, ToolValidator};
pub use value_objects::ResultEnvelope;
