//! JSON-RPC protocol types for the MCP stdio surface.
//!
//! The bridge is the server side of the exchange: clients send requests
//! (`initialize`, `ping`, `tools/list`, `tools/call`) and notifications
//! (`notifications/initialized`), and every request gets exactly one
//! response correlated by id. Ids are kept as raw JSON values so number
//! and string ids round-trip untouched.

use bridge_domain::tool::value_objects::ResultEnvelope;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::HashMap;

/// Protocol revision answered in the `initialize` handshake.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

// JSON-RPC 2.0 error codes. Handler failures are not listed here: they
// are answered as error envelopes inside a successful response, so the
// protocol layer only ever reports framing-level faults.
pub const PARSE_ERROR: i64 = -32700;
pub const INVALID_REQUEST: i64 = -32600;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;

/// Classification of one incoming frame.
#[derive(Debug, PartialEq, Eq)]
pub enum MessageKind {
    /// Has `method` and `id`; must be answered.
    Request { id: Value },
    /// Has `method` but no `id`; consumed silently.
    Notification,
    /// Anything else, including a frame with an `id` but no `method`.
    Invalid,
}

/// Classify a decoded frame by inspecting its `id` and `method` fields.
pub fn classify_message(json: &Value) -> MessageKind {
    let id = json.get("id").filter(|v| !v.is_null());
    let method = json.get("method").and_then(|v| v.as_str());

    match (id, method) {
        (Some(id), Some(_)) => MessageKind::Request { id: id.clone() },
        (None, Some(_)) => MessageKind::Notification,
        _ => MessageKind::Invalid,
    }
}

/// An incoming JSON-RPC request or notification.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcRequest {
    pub method: String,
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub params: Value,
}

/// Outgoing JSON-RPC response.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: &'static str,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

/// JSON-RPC error object
#[derive(Debug, Clone, Serialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

impl JsonRpcResponse {
    pub fn result(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: Value, code: i64, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: None,
            error: Some(RpcError {
                code,
                message: message.into(),
            }),
        }
    }
}

/// Parameters of a `tools/call` request.
#[derive(Debug, Clone, Deserialize)]
pub struct CallToolParams {
    pub name: String,
    #[serde(default)]
    pub arguments: HashMap<String, Value>,
}

/// Build the `initialize` result payload.
pub fn initialize_result(server_name: &str, server_version: &str) -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": { "tools": {} },
        "serverInfo": {
            "name": server_name,
            "version": server_version,
        },
    })
}

/// Convert a result envelope into the `tools/call` result payload.
pub fn envelope_to_result(envelope: &ResultEnvelope) -> Value {
    json!({
        "content": [{ "type": "text", "text": envelope.text }],
        "isError": envelope.is_error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_request() {
        let json = json!({"jsonrpc": "2.0", "id": 1, "method": "tools/list"});
        assert_eq!(classify_message(&json), MessageKind::Request { id: json!(1) });
    }

    #[test]
    fn classify_string_id_request() {
        let json = json!({"jsonrpc": "2.0", "id": "init-1", "method": "initialize"});
        assert_eq!(
            classify_message(&json),
            MessageKind::Request { id: json!("init-1") }
        );
    }

    #[test]
    fn classify_notification() {
        let json = json!({"jsonrpc": "2.0", "method": "notifications/initialized"});
        assert_eq!(classify_message(&json), MessageKind::Notification);
    }

    #[test]
    fn classify_frame_without_method() {
        let json = json!({"jsonrpc": "2.0", "id": 7});
        assert_eq!(classify_message(&json), MessageKind::Invalid);
    }

    #[test]
    fn test_initialize_result_shape() {
        let result = initialize_result("git-scripts-bridge", "0.3.1");
        assert_eq!(result["protocolVersion"], "2024-11-05");
        assert!(result["capabilities"]["tools"].is_object());
        assert_eq!(result["serverInfo"]["name"], "git-scripts-bridge");
        assert_eq!(result["serverInfo"]["version"], "0.3.1");
    }

    #[test]
    fn test_envelope_to_result() {
        let result = envelope_to_result(&ResultEnvelope::error("Unknown tool: nope"));
        assert_eq!(result["isError"], true);
        assert_eq!(result["content"][0]["type"], "text");
        assert_eq!(result["content"][0]["text"], "Unknown tool: nope");
    }

    #[test]
    fn test_response_serialization_omits_absent_side() {
        let ok = serde_json::to_value(JsonRpcResponse::result(json!(1), json!({}))).unwrap();
        assert!(ok.get("error").is_none());

        let err = serde_json::to_value(JsonRpcResponse::error(
            json!(2),
            METHOD_NOT_FOUND,
            "Method not found: frobnicate",
        ))
        .unwrap();
        assert!(err.get("result").is_none());
        assert_eq!(err["error"]["code"], -32601);
    }

    #[test]
    fn test_call_tool_params_default_arguments() {
        let params: CallToolParams =
            serde_json::from_value(json!({"name": "git_undo"})).unwrap();
        assert_eq!(params.name, "git_undo");
        assert!(params.arguments.is_empty());
    }
}
