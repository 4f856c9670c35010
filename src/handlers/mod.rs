pub mod components;
pub mod rules;
pub mod setup;

use serde::de::DeserializeOwned;

use crate::protocol::{
    FindByAttributeParams, GetComponentDocsParams, GetDesignRulesParams, GetSetupGuideParams,
    InitializeParams, JsonRpcError, JsonRpcRequest, JsonRpcResponse, SearchComponentsParams,
    SearchDesignRulesParams, ToolCallParams, ToolResult,
};
use crate::store::DocStore;

/// Dispatch a JSON-RPC request to the appropriate handler.
///
/// Returns `None` for notifications (no response required).
pub fn dispatch(req: &JsonRpcRequest, store: &DocStore) -> Option<JsonRpcResponse> {
    match req.method.as_str() {
        "initialize" => {
            if let Some(v) = &req.params {
                if let Ok(p) = serde_json::from_value::<InitializeParams>(v.clone()) {
                    if let Some(client) = p.client_info {
                        eprintln!(
                            "Client connected: {} {}",
                            client.name.unwrap_or_default(),
                            client.version.unwrap_or_default()
                        );
                    }
                }
            }

            let result = serde_json::json!({
                "protocolVersion": "2024-11-05",
                "capabilities": {
                    "tools": {}
                },
                "serverInfo": {
                    "name": "mcp-modus-server",
                    "version": env!("CARGO_PKG_VERSION")
                }
            });
            Some(JsonRpcResponse::success(req.id.clone(), result))
        }

        "notifications/initialized" => None,

        "ping" => Some(JsonRpcResponse::success(req.id.clone(), serde_json::json!({}))),

        "tools/list" => Some(JsonRpcResponse::success(req.id.clone(), tool_listing())),

        "tools/call" => {
            let params: ToolCallParams = match &req.params {
                Some(v) => match serde_json::from_value(v.clone()) {
                    Ok(p) => p,
                    Err(e) => {
                        return Some(JsonRpcResponse::error(
                            req.id.clone(),
                            JsonRpcError::invalid_params(format!(
                                "Invalid tools/call params: {e}"
                            )),
                        ));
                    }
                },
                None => {
                    return Some(JsonRpcResponse::error(
                        req.id.clone(),
                        JsonRpcError::invalid_params("Missing params for tools/call"),
                    ));
                }
            };

            let tool_result = dispatch_tool_call(&params, store);
            let result_json = serde_json::to_value(&tool_result)
                .expect("ToolResult must serialize to JSON Value");
            Some(JsonRpcResponse::success(req.id.clone(), result_json))
        }

        _ => Some(JsonRpcResponse::error(
            req.id.clone(),
            JsonRpcError::method_not_found(&req.method),
        )),
    }
}

fn dispatch_tool_call(params: &ToolCallParams, store: &DocStore) -> ToolResult {
    match params.name.as_str() {
        "search_components" => match parse_args::<SearchComponentsParams>(params) {
            Ok(p) => components::search(store, &p.query),
            Err(err) => err,
        },

        "get_component_docs" => match parse_args::<GetComponentDocsParams>(params) {
            Ok(p) => components::docs(store, &p.component),
            Err(err) => err,
        },

        "list_all_components" => components::list_all(store),

        "find_by_attribute" => match parse_args::<FindByAttributeParams>(params) {
            Ok(p) => components::by_attribute(store, &p.attribute),
            Err(err) => err,
        },

        "get_design_rules" => match parse_args::<GetDesignRulesParams>(params) {
            Ok(p) => rules::get(store, &p.category),
            Err(err) => err,
        },

        "search_design_rules" => match parse_args::<SearchDesignRulesParams>(params) {
            Ok(p) => rules::search(store, &p.query),
            Err(err) => err,
        },

        "list_design_categories" => rules::list_categories(store),

        "get_setup_guide" => match parse_args::<GetSetupGuideParams>(params) {
            Ok(p) => setup::guide(store, &p.setup_type),
            Err(err) => err,
        },

        "get_theme_usage" => setup::theme_usage(store),

        "get_development_rules" => setup::development_rules(store),

        _ => ToolResult::error(format!("Unknown tool: {}", params.name)),
    }
}

/// Deserialize a tool's argument bag.
///
/// Absent arguments become the type's default (empty strings), so a missing
/// argument is never an error; an argument of the wrong fundamental type is
/// reported as a per-call tool error.
fn parse_args<T: Default + DeserializeOwned>(params: &ToolCallParams) -> Result<T, ToolResult> {
    match &params.arguments {
        None => Ok(T::default()),
        Some(v) => serde_json::from_value(v.clone()).map_err(|e| {
            ToolResult::error(format!("Invalid arguments for {}: {e}", params.name))
        }),
    }
}

fn tool_listing() -> serde_json::Value {
    serde_json::json!({
        "tools": [
            {
                "name": "search_components",
                "description": "Search for Modus Web Components by name or keyword. Returns a list of matching components with brief descriptions.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "query": {
                            "type": "string",
                            "description": "Search query (component name, keyword, or feature)"
                        }
                    },
                    "required": ["query"]
                }
            },
            {
                "name": "get_component_docs",
                "description": "Get the complete documentation for a specific Modus Web Component including attributes, events, and usage examples.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "component": {
                            "type": "string",
                            "description": "The component name (e.g., \"button\", \"card\", \"modal\")"
                        }
                    },
                    "required": ["component"]
                }
            },
            {
                "name": "list_all_components",
                "description": "List all available Modus Web Components with their categories.",
                "inputSchema": {
                    "type": "object",
                    "properties": {}
                }
            },
            {
                "name": "find_by_attribute",
                "description": "Find components that have a specific attribute or property.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "attribute": {
                            "type": "string",
                            "description": "The attribute name to search for (e.g., \"disabled\", \"color\", \"size\")"
                        }
                    },
                    "required": ["attribute"]
                }
            },
            {
                "name": "get_design_rules",
                "description": "Get specific design rules for Modus Web Components (colors, icons, spacing, typography, etc.).",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "category": {
                            "type": "string",
                            "description": "The design rule category (e.g., \"colors\", \"icons\", \"spacing\", \"typography\", \"breakpoints\", \"radius_stroke\")"
                        }
                    },
                    "required": ["category"]
                }
            },
            {
                "name": "search_design_rules",
                "description": "Search across all design rules by keyword or term.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "query": {
                            "type": "string",
                            "description": "Search query for design rules (e.g., \"primary color\", \"icon size\", \"spacing scale\")"
                        }
                    },
                    "required": ["query"]
                }
            },
            {
                "name": "list_design_categories",
                "description": "List all available design rule categories.",
                "inputSchema": {
                    "type": "object",
                    "properties": {}
                }
            },
            {
                "name": "get_setup_guide",
                "description": "Get setup instructions for HTML or React projects using Modus Web Components.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "type": {
                            "type": "string",
                            "description": "The setup type (\"html\", \"react\", \"testing\")"
                        }
                    },
                    "required": ["type"]
                }
            },
            {
                "name": "get_theme_usage",
                "description": "Get theme implementation guidelines and usage instructions.",
                "inputSchema": {
                    "type": "object",
                    "properties": {}
                }
            },
            {
                "name": "get_development_rules",
                "description": "Get universal development rules and best practices for Modus Web Components.",
                "inputSchema": {
                    "type": "object",
                    "properties": {}
                }
            }
        ]
    })
}
