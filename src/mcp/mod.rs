//! MCP Server for the Second Brain
//!
//! Exposes document search, document access and the trackers over stdio.

mod server;

pub use server::run_mcp_server;
