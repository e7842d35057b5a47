//! Tool domain value objects — the result envelope
//!
//! The envelope is the only externally visible representation of a tool
//! call's outcome. Success and failure share one shape: a boolean error
//! flag plus a text payload. The transport layer serializes it verbatim;
//! nothing streams and nothing is partial.

use serde::{Deserialize, Serialize};

/// The structured result returned for every tool call.
///
/// Exactly one envelope is produced per call, whether the call succeeded,
/// failed validation, or could not even spawn its child process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEnvelope {
    /// Whether this envelope represents a failure
    pub is_error: bool,
    /// Text payload shown to the caller
    pub text: String,
}

impl ResultEnvelope {
    /// Create a success envelope
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            is_error: false,
            text: text.into(),
        }
    }

    /// Create an error envelope
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            is_error: true,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let envelope = ResultEnvelope::success("done");
        assert!(!envelope.is_error());
        assert_eq!(envelope.text(), "done");
    }

    #[test]
    fn test_error_envelope() {
        let envelope = ResultEnvelope::error("Unknown tool: git_frobnicate");
        assert!(envelope.is_error());
        assert_eq!(envelope.text(), "Unknown tool: git_frobnicate");
    }

    #[test]
    fn test_envelope_serializes_both_fields() {
        let json = serde_json::to_value(ResultEnvelope::error("boom")).unwrap();
        assert_eq!(json["is_error"], true);
        assert_eq!(json["text"], "boom");
    }
}
