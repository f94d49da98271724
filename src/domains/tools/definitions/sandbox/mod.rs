//! Sandbox API tools.
//!
//! Lifecycle operations against `/buildbear-sandbox`:
//! - `create`: fork a network into a new sandbox
//! - `details`: fetch a sandbox's configuration
//! - `snapshots`: list a sandbox's snapshots
//! - `delete`: tear a sandbox down
//! - `networks`: list the networks that can be forked

pub mod create;
pub mod delete;
pub mod details;
pub mod networks;
pub mod snapshots;

use schemars::JsonSchema;
use serde::Deserialize;

pub use create::{CreateSandboxParams, CreateSandboxTool};
pub use delete::DeleteSandboxTool;
pub use details::FetchSandboxDetailsTool;
pub use networks::{GetAvailableNetworksTool, NoParams};
pub use snapshots::GetSandboxSnapshotsTool;

/// Parameters for tools that address a single sandbox.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SandboxIdParams {
    #[schemars(description = "ID of the sandbox")]
    pub sandbox_id: String,
}
