//! BuildBear MCP Server Library
//!
//! Exposes the BuildBear sandbox and explorer REST APIs as Model Context
//! Protocol tools, so an agent can create, inspect and delete forked-chain
//! sandboxes and query their block explorers.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handler and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **api**: the BuildBear HTTP client shared by every tool
//!   - **tools**: the MCP tools, one per REST endpoint
//!   - **resources**: read-only server information for clients
//!
//! # Example
//!
//! ```rust,no_run
//! use buildbear_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

pub use core::{Config, Error, McpServer, Result};
