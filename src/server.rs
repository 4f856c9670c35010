use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

use crate::handlers;
use crate::protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
use crate::store::DocStore;

/// Maximum bytes per JSON-RPC message (1 MiB).
const MAX_MESSAGE_BYTES: usize = 1024 * 1024;

/// MCP server that communicates over newline-delimited JSON-RPC 2.0.
///
/// Holds the document store loaded once at startup; every request is
/// answered synchronously before the next one is read, so no locking is
/// needed.
pub struct McpServer {
    store: DocStore,
    initialized: bool,
}

impl McpServer {
    pub fn new(store: DocStore) -> Self {
        Self {
            store,
            initialized: false,
        }
    }

    /// Serve on stdio until EOF. Stdout carries the wire protocol; all
    /// diagnostics go to stderr.
    pub async fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        eprintln!("Modus Web Components MCP Server running on stdio");
        self.serve(tokio::io::stdin(), tokio::io::stdout()).await
    }

    /// Serve on an arbitrary transport until EOF.
    ///
    /// Split out from [`Self::run`] so tests can drive a full session over
    /// an in-memory duplex pipe.
    pub async fn serve<R, W>(
        &mut self,
        reader: R,
        mut writer: W,
    ) -> Result<(), Box<dyn std::error::Error>>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut reader = BufReader::new(reader);
        let mut raw = Vec::new();

        loop {
            raw.clear();
            let n = reader.read_until(b'\n', &mut raw).await?;
            if n == 0 {
                break;
            }

            if n > MAX_MESSAGE_BYTES {
                eprintln!("Message too large: {n} bytes (limit {MAX_MESSAGE_BYTES})");
                write_response(
                    &mut writer,
                    &JsonRpcResponse::error(None, JsonRpcError::parse_error()),
                )
                .await?;
                continue;
            }

            let trimmed = match std::str::from_utf8(&raw) {
                Ok(s) => s.trim(),
                Err(_) => {
                    write_response(
                        &mut writer,
                        &JsonRpcResponse::error(None, JsonRpcError::parse_error()),
                    )
                    .await?;
                    continue;
                }
            };

            if trimmed.is_empty() {
                continue;
            }

            let req: JsonRpcRequest = match serde_json::from_str(trimmed) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Parse error: {e}");
                    write_response(
                        &mut writer,
                        &JsonRpcResponse::error(None, JsonRpcError::parse_error()),
                    )
                    .await?;
                    continue;
                }
            };

            // Validate jsonrpc version
            if req.jsonrpc != "2.0" {
                write_response(
                    &mut writer,
                    &JsonRpcResponse::error(req.id.clone(), JsonRpcError::invalid_request()),
                )
                .await?;
                continue;
            }

            // Initialization gate: only `initialize` is allowed before the
            // handshake completes
            if !self.initialized && req.method != "initialize" {
                if req.id.is_none() {
                    continue;
                }
                write_response(
                    &mut writer,
                    &JsonRpcResponse::error(
                        req.id.clone(),
                        JsonRpcError::invalid_request_with("Server not initialized"),
                    ),
                )
                .await?;
                continue;
            }

            if let Some(resp) = handlers::dispatch(&req, &self.store) {
                write_response(&mut writer, &resp).await?;
            }

            if req.method == "initialize" {
                self.initialized = true;
            }
        }

        Ok(())
    }
}

async fn write_response<W>(
    writer: &mut W,
    resp: &JsonRpcResponse,
) -> Result<(), Box<dyn std::error::Error>>
where
    W: AsyncWrite + Unpin,
{
    let out = serde_json::to_string(resp)?;
    writer.write_all(out.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}
