//! MCP server for the Modus Web Components documentation corpus.
//!
//! Exposes component docs, design rules, and setup guides as MCP tools
//! (`search_components`, `get_component_docs`, `get_design_rules`, ...) over
//! JSON-RPC 2.0 stdio transport, compatible with any MCP-aware AI agent.
//!
//! Documentation files are fetched by the companion `download-docs` binary
//! and loaded into memory once at startup; every tool call is a synchronous
//! scan over the immutable in-memory store.

pub mod config;
pub mod handlers;
pub mod protocol;
pub mod query;
pub mod server;
pub mod store;

pub mod schema;
