use serde::{Deserialize, Serialize};

/// JSON-RPC 2.0 ID — may be a number or string per spec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RpcId {
    Number(i64),
    Str(String),
}

/// JSON-RPC 2.0 request envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: Option<RpcId>,
    pub method: String,
    pub params: Option<serde_json::Value>,
}

/// MCP `initialize` params.
#[derive(Debug, Clone, Deserialize)]
pub struct InitializeParams {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: Option<String>,
    #[serde(rename = "clientInfo")]
    pub client_info: Option<ClientInfo>,
}

/// Client information sent during `initialize`.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientInfo {
    pub name: Option<String>,
    pub version: Option<String>,
}

/// Parameters for `tools/call`.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCallParams {
    pub name: String,
    pub arguments: Option<serde_json::Value>,
}

// Tool argument bags. A missing string argument deserializes to the empty
// string; a present argument of the wrong type is a deserialization error
// that the dispatcher reports as a per-call tool error.

/// Arguments for the `search_components` tool.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchComponentsParams {
    #[serde(default)]
    pub query: String,
}

/// Arguments for the `get_component_docs` tool.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetComponentDocsParams {
    #[serde(default)]
    pub component: String,
}

/// Arguments for the `find_by_attribute` tool.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FindByAttributeParams {
    #[serde(default)]
    pub attribute: String,
}

/// Arguments for the `get_design_rules` tool.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetDesignRulesParams {
    #[serde(default)]
    pub category: String,
}

/// Arguments for the `search_design_rules` tool.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchDesignRulesParams {
    #[serde(default)]
    pub query: String,
}

/// Arguments for the `get_setup_guide` tool.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetSetupGuideParams {
    #[serde(default, rename = "type")]
    pub setup_type: String,
}
