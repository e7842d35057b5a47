//! The MCP serve loop.
//!
//! One background writer task owns the write half and drains an mpsc
//! channel, so responses from concurrently running `tools/call` tasks
//! are written one frame at a time. The read loop never blocks on a
//! child process: every `tools/call` is handled on its own spawned task
//! and correlated back to its request id. A panic inside a handler is
//! caught at the task join point and answered with a generic error
//! envelope; the stream itself survives.

use crate::mcp::protocol::{
    CallToolParams, INVALID_PARAMS, INVALID_REQUEST, JsonRpcRequest, JsonRpcResponse, MessageKind,
    METHOD_NOT_FOUND, PARSE_ERROR, classify_message, envelope_to_result, initialize_result,
};
use crate::mcp::schema::tool_to_schema;
use bridge_application::ToolBridge;
use bridge_domain::tool::entities::ToolCall;
use bridge_domain::tool::value_objects::ResultEnvelope;
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info, trace, warn};

/// MCP server over newline-delimited JSON-RPC frames.
pub struct McpServer {
    bridge: Arc<ToolBridge>,
    server_name: String,
    server_version: String,
}

impl McpServer {
    pub fn new(
        bridge: ToolBridge,
        server_name: impl Into<String>,
        server_version: impl Into<String>,
    ) -> Self {
        Self {
            bridge: Arc::new(bridge),
            server_name: server_name.into(),
            server_version: server_version.into(),
        }
    }

    /// Serve on the process's stdin/stdout.
    pub async fn serve_stdio(self) -> std::io::Result<()> {
        self.serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
            .await
    }

    /// Serve on arbitrary halves. Returns when the reader reaches EOF
    /// and all in-flight calls have been answered.
    pub async fn serve<R, W>(self, mut reader: R, mut writer: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<JsonRpcResponse>();

        // Single writer task; response frames never interleave.
        let writer_task = tokio::spawn(async move {
            while let Some(response) = rx.recv().await {
                let Ok(line) = serde_json::to_string(&response) else {
                    continue;
                };
                if writer.write_all(line.as_bytes()).await.is_err() {
                    break;
                }
                if writer.write_all(b"\n").await.is_err() {
                    break;
                }
                let _ = writer.flush().await;
            }
            let _ = writer.shutdown().await;
        });

        info!("MCP server listening on stdio");

        let mut line = String::new();
        loop {
            line.clear();
            let read = reader.read_line(&mut line).await?;
            if read == 0 {
                debug!("Client closed the stream");
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            let frame: Value = match serde_json::from_str(&line) {
                Ok(frame) => frame,
                Err(e) => {
                    warn!("Unparseable frame: {}", e);
                    let _ = tx.send(JsonRpcResponse::error(
                        Value::Null,
                        PARSE_ERROR,
                        "Parse error",
                    ));
                    continue;
                }
            };

            match classify_message(&frame) {
                MessageKind::Notification => {
                    trace!(
                        "Notification: {}",
                        frame.get("method").and_then(|m| m.as_str()).unwrap_or("")
                    );
                }
                MessageKind::Invalid => {
                    let id = frame.get("id").cloned().unwrap_or(Value::Null);
                    let _ = tx.send(JsonRpcResponse::error(
                        id,
                        INVALID_REQUEST,
                        "Invalid request",
                    ));
                }
                MessageKind::Request { .. } => {
                    let request: JsonRpcRequest = match serde_json::from_value(frame) {
                        Ok(request) => request,
                        Err(e) => {
                            let _ = tx.send(JsonRpcResponse::error(
                                Value::Null,
                                INVALID_REQUEST,
                                format!("Invalid request: {}", e),
                            ));
                            continue;
                        }
                    };
                    self.handle_request(request, &tx);
                }
            }
        }

        // Drop our sender so the writer drains in-flight responses and exits.
        drop(tx);
        let _ = writer_task.await;
        Ok(())
    }

    fn handle_request(
        &self,
        request: JsonRpcRequest,
        tx: &mpsc::UnboundedSender<JsonRpcResponse>,
    ) {
        debug!("Request: {}", request.method);
        let id = request.id.clone();

        let response = match request.method.as_str() {
            "initialize" => JsonRpcResponse::result(
                id,
                initialize_result(&self.server_name, &self.server_version),
            ),
            "ping" => JsonRpcResponse::result(id, json!({})),
            "tools/list" => {
                let tools: Vec<Value> = self
                    .bridge
                    .list_tools()
                    .iter()
                    .map(tool_to_schema)
                    .collect();
                JsonRpcResponse::result(id, json!({ "tools": tools }))
            }
            "tools/call" => {
                let params: CallToolParams = match serde_json::from_value(request.params) {
                    Ok(params) => params,
                    Err(e) => {
                        let _ = tx.send(JsonRpcResponse::error(
                            id,
                            INVALID_PARAMS,
                            format!("Invalid params: {}", e),
                        ));
                        return;
                    }
                };
                self.spawn_call(id, params, tx.clone());
                return;
            }
            other => JsonRpcResponse::error(
                id,
                METHOD_NOT_FOUND,
                format!("Method not found: {}", other),
            ),
        };

        let _ = tx.send(response);
    }

    /// Run one `tools/call` on its own task so the read loop stays free.
    fn spawn_call(
        &self,
        id: Value,
        params: CallToolParams,
        tx: mpsc::UnboundedSender<JsonRpcResponse>,
    ) {
        let bridge = Arc::clone(&self.bridge);
        tokio::spawn(async move {
            let call = ToolCall {
                tool_name: params.name,
                arguments: params.arguments,
            };

            // Inner spawn isolates handler panics at the join point.
            let handle = tokio::spawn(async move { bridge.call(&call).await });
            let envelope = match handle.await {
                Ok(envelope) => envelope,
                Err(e) => {
                    warn!("Tool call task failed: {}", e);
                    ResultEnvelope::error("Internal error: tool call handler failed")
                }
            };

            let _ = tx.send(JsonRpcResponse::result(id, envelope_to_result(&envelope)));
        });
    }
}
