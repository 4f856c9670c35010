//! Full-session tests that drive the server loop over an in-memory duplex
//! transport, the way an MCP client exercises the stdio protocol: write
//! newline-delimited JSON-RPC requests, read back newline-delimited
//! responses until EOF.

use serde_json::json;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use mcp_modus_server::server::McpServer;
use mcp_modus_server::store::{DocRecord, DocStore};

fn sample_store() -> DocStore {
    DocStore {
        components: vec![DocRecord {
            filename: "modus-wc-button.md".into(),
            key: "button".into(),
            content: "# Button\n\nA clickable button element.\n".into(),
        }],
        design_rules: Vec::new(),
        setup_guides: Vec::new(),
    }
}

/// Run a complete session: send every line, close the write side, collect
/// all responses until the server finishes.
async fn run_session(store: DocStore, lines: Vec<String>) -> Vec<serde_json::Value> {
    let (client_io, server_io) = tokio::io::duplex(1024 * 1024);
    let (server_read, server_write) = tokio::io::split(server_io);
    let (client_read, mut client_write) = tokio::io::split(client_io);

    let server_task = tokio::spawn(async move {
        let mut server = McpServer::new(store);
        server
            .serve(server_read, server_write)
            .await
            .expect("server loop failed");
    });

    for line in lines {
        client_write.write_all(line.as_bytes()).await.unwrap();
        client_write.write_all(b"\n").await.unwrap();
    }
    client_write.shutdown().await.unwrap();

    let mut responses = Vec::new();
    let mut reader = BufReader::new(client_read).lines();
    while let Some(line) = reader.next_line().await.unwrap() {
        if !line.trim().is_empty() {
            responses.push(serde_json::from_str(&line).unwrap());
        }
    }

    server_task.await.unwrap();
    responses
}

fn initialize_request(id: i64) -> String {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": "initialize",
        "params": {
            "protocolVersion": "2024-11-05",
            "clientInfo": { "name": "session-test", "version": "0.0.1" }
        }
    })
    .to_string()
}

#[tokio::test]
async fn full_session_initialize_list_and_call() {
    let lines = vec![
        initialize_request(1),
        json!({ "jsonrpc": "2.0", "method": "notifications/initialized" }).to_string(),
        json!({ "jsonrpc": "2.0", "id": 2, "method": "tools/list" }).to_string(),
        json!({
            "jsonrpc": "2.0",
            "id": 3,
            "method": "tools/call",
            "params": {
                "name": "get_component_docs",
                "arguments": { "component": "button" }
            }
        })
        .to_string(),
    ];

    let responses = run_session(sample_store(), lines).await;

    // The notification produces no response.
    assert_eq!(responses.len(), 3);

    assert_eq!(responses[0]["id"], 1);
    assert_eq!(
        responses[0]["result"]["serverInfo"]["name"],
        "mcp-modus-server"
    );
    assert_eq!(responses[0]["result"]["protocolVersion"], "2024-11-05");

    assert_eq!(responses[1]["result"]["tools"].as_array().unwrap().len(), 10);

    assert_eq!(responses[2]["id"], 3);
    assert_eq!(
        responses[2]["result"]["content"][0]["text"],
        "# Button\n\nA clickable button element.\n"
    );
}

#[tokio::test]
async fn request_before_initialize_is_rejected() {
    let lines = vec![
        json!({ "jsonrpc": "2.0", "id": 1, "method": "tools/list" }).to_string(),
        initialize_request(2),
    ];

    let responses = run_session(sample_store(), lines).await;
    assert_eq!(responses.len(), 2);

    assert_eq!(responses[0]["error"]["code"], -32600);
    assert_eq!(responses[0]["error"]["message"], "Server not initialized");
    assert!(responses[1]["result"]["serverInfo"].is_object());
}

#[tokio::test]
async fn notification_before_initialize_is_dropped() {
    let lines = vec![
        json!({ "jsonrpc": "2.0", "method": "notifications/initialized" }).to_string(),
        initialize_request(1),
    ];

    let responses = run_session(sample_store(), lines).await;

    // Only the initialize response; the early notification is silently dropped.
    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0]["id"], 1);
}

#[tokio::test]
async fn malformed_json_is_a_parse_error() {
    let lines = vec![
        "this is not json".to_string(),
        initialize_request(1),
    ];

    let responses = run_session(sample_store(), lines).await;
    assert_eq!(responses.len(), 2);

    assert_eq!(responses[0]["error"]["code"], -32700);
    assert!(responses[0].get("id").is_none());
    assert_eq!(responses[1]["id"], 1);
}

#[tokio::test]
async fn wrong_jsonrpc_version_is_invalid_request() {
    let lines = vec![
        json!({ "jsonrpc": "1.0", "id": 7, "method": "ping" }).to_string(),
    ];

    let responses = run_session(sample_store(), lines).await;
    assert_eq!(responses.len(), 1);

    assert_eq!(responses[0]["error"]["code"], -32600);
    assert_eq!(responses[0]["id"], 7);
}

#[tokio::test]
async fn unknown_method_after_initialize_is_method_not_found() {
    let lines = vec![
        initialize_request(1),
        json!({ "jsonrpc": "2.0", "id": 2, "method": "resources/read" }).to_string(),
    ];

    let responses = run_session(sample_store(), lines).await;
    assert_eq!(responses.len(), 2);

    assert_eq!(responses[1]["error"]["code"], -32601);
    assert_eq!(
        responses[1]["error"]["message"],
        "Method not found: resources/read"
    );
}
