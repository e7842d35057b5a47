//! Domain error types
//!
//! These render directly as envelope text, so their display strings are
//! part of the externally visible contract.

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("❌ Error: {0}")]
    Validation(String),

    #[error("❌ Unexpected output format:\n{0}")]
    UnexpectedOutput(String),
}
