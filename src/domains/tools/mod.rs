//! Tools domain module.
//!
//! Tools are the MCP surface of the BuildBear API: each one validates its
//! arguments, issues a single API call and formats the result as text.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - ToolRouter builder used by the server handler
//! - `registry.rs` - Tool catalogue and metadata
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file under `definitions/sandbox/` or `definitions/explorer/`
//! 2. Define params, `execute()`, `to_tool()` and `create_route()`
//! 3. Export it from the group's `mod.rs` and `definitions/mod.rs`
//! 4. Add the route in `router.rs` and the entry in `registry.rs`

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
