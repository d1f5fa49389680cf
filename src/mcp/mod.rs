//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes glean's configuration and extraction results to AI coding agents
//! over stdio.
//!
//! ## Module Structure
//!
//! - `server`: Main MCP server implementation
//! - `types`: Tool parameter and result types

mod server;
pub mod types;

pub use server::{GleanMcpServer, run_server};
