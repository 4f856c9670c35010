use mcp_modus_server::config::ServerConfig;
use mcp_modus_server::server::McpServer;
use mcp_modus_server::store::DocStore;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = ServerConfig::from_env();
    let store = DocStore::load(&config);

    let mut server = McpServer::new(store);
    if let Err(e) = server.run().await {
        eprintln!("mcp-modus-server: fatal error: {e}");
        std::process::exit(1);
    }
}
