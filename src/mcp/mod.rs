//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes msgkey checks and key lookups to AI assistants over stdio.
//!
//! ## Module Structure
//!
//! - `server`: Main MCP server implementation
//! - `types`: Tool parameter and result types

mod server;
pub mod types;

pub use server::{MsgkeyMcpServer, run_server};
