//! Port for structured call auditing.
//!
//! Defines the [`CallLogger`] trait for recording tool-call events to a
//! structured log. This is separate from `tracing`-based operation logs:
//! tracing handles human-readable diagnostic messages, while this port
//! captures a machine-readable audit trail (JSONL) of every dispatched
//! call and its outcome.

use serde_json::Value;

/// A structured audit event for logging.
pub struct CallEvent {
    /// Event type identifier (e.g., "tool_call", "tool_result").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl CallEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging call events to a structured log.
///
/// The `log` method is intentionally synchronous and non-fallible so
/// auditing can never disrupt or fail a call; logging failures are
/// silently ignored.
pub trait CallLogger: Send + Sync {
    /// Record a call event.
    fn log(&self, event: CallEvent);
}

/// No-op implementation for tests and when auditing is disabled.
pub struct NoCallLogger;

impl CallLogger for NoCallLogger {
    fn log(&self, _event: CallEvent) {}
}
