//! Tool Router - builds the rmcp ToolRouter.
//!
//! Each tool knows how to create its own route; they all share one
//! [`SandboxApi`] handle.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{
    CreateSandboxTool, DeleteSandboxTool, FetchSandboxDetailsTool, GetAccountBalanceTool,
    GetAvailableNetworksTool, GetBlockByTimeTool, GetContractAbiTool, GetSandboxSnapshotsTool,
    GetSourceCodeTool,
};
use crate::domains::api::SandboxApi;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(api: Arc<dyn SandboxApi>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(CreateSandboxTool::create_route(api.clone()))
        .with_route(FetchSandboxDetailsTool::create_route(api.clone()))
        .with_route(GetSandboxSnapshotsTool::create_route(api.clone()))
        .with_route(DeleteSandboxTool::create_route(api.clone()))
        .with_route(GetAvailableNetworksTool::create_route(api.clone()))
        .with_route(GetSourceCodeTool::create_route(api.clone()))
        .with_route(GetContractAbiTool::create_route(api.clone()))
        .with_route(GetBlockByTimeTool::create_route(api.clone()))
        .with_route(GetAccountBalanceTool::create_route(api))
}
