//! JSON Schema conversion for `tools/list`.
//!
//! Maps catalog definitions to the MCP tool listing format:
//! `{"name", "description", "inputSchema"}` with an object schema whose
//! properties carry `type`, `description`, and `default` where one is
//! documented.

use bridge_domain::tool::entities::ToolDefinition;
use serde_json::{Map, Value, json};

fn schema_type(param_type: &str) -> &'static str {
    match param_type {
        "boolean" => "boolean",
        "number" => "number",
        "integer" => "integer",
        _ => "string",
    }
}

/// Convert one tool definition to its MCP listing entry.
pub fn tool_to_schema(tool: &ToolDefinition) -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();

    for param in &tool.parameters {
        let mut prop = Map::new();
        prop.insert("type".to_string(), json!(schema_type(&param.param_type)));
        prop.insert("description".to_string(), json!(param.description));
        if let Some(default) = &param.default {
            prop.insert("default".to_string(), default.clone());
        }
        properties.insert(param.name.clone(), Value::Object(prop));

        if param.required {
            required.push(json!(param.name));
        }
    }

    json!({
        "name": tool.name,
        "description": tool.description,
        "inputSchema": {
            "type": "object",
            "properties": properties,
            "required": required,
        }
    })
}
