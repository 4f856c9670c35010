//! Keeps the tool input schemas advertised by `tools/list` honest: every
//! schema must compile as JSON Schema and accept/reject the argument shapes
//! the dispatcher expects.

use jsonschema::validator_for;
use serde_json::json;

use mcp_modus_server::handlers;
use mcp_modus_server::protocol::{JsonRpcRequest, RpcId};
use mcp_modus_server::schema::validate_json;
use mcp_modus_server::store::DocStore;

fn advertised_tools() -> Vec<serde_json::Value> {
    let store = DocStore::default();
    let req = JsonRpcRequest {
        jsonrpc: "2.0".into(),
        id: Some(RpcId::Number(1)),
        method: "tools/list".into(),
        params: None,
    };

    let response = handlers::dispatch(&req, &store).unwrap();
    response.result.unwrap()["tools"]
        .as_array()
        .unwrap()
        .clone()
}

#[test]
fn advertised_tool_schemas_compile() {
    let tools = advertised_tools();
    assert_eq!(tools.len(), 10);

    for tool in &tools {
        let schema = &tool["inputSchema"];
        validator_for(schema)
            .unwrap_or_else(|e| panic!("schema for {} does not compile: {e}", tool["name"]));
        assert_eq!(schema["type"], "object");
        assert!(!tool["description"].as_str().unwrap().is_empty());
    }
}

#[test]
fn string_arguments_validate_against_search_schema() {
    let tools = advertised_tools();
    let search = tools
        .iter()
        .find(|t| t["name"] == "search_components")
        .unwrap();
    let schema = &search["inputSchema"];

    validate_json(schema, &json!({ "query": "button" })).expect("valid arguments must pass");
    assert!(validate_json(schema, &json!({ "query": 42 })).is_err());
}

#[test]
fn no_argument_tools_accept_empty_objects() {
    let tools = advertised_tools();

    for name in [
        "list_all_components",
        "list_design_categories",
        "get_theme_usage",
        "get_development_rules",
    ] {
        let tool = tools.iter().find(|t| t["name"] == name).unwrap();
        validate_json(&tool["inputSchema"], &json!({}))
            .unwrap_or_else(|e| panic!("{name} must accept empty arguments: {e}"));
    }
}
