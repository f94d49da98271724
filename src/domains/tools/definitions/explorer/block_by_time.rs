//! Get block by time tool.
//!
//! Resolves the block closest before a unix timestamp. When no timestamp is
//! given the current time is used, i.e. the latest block.

use futures::FutureExt;
use futures::future::BoxFuture;
use rmcp::{
    handler::server::tool::ToolRoute,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use super::{explorer_request, query_explorer};
use crate::domains::api::SandboxApi;
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::{
    api_route, failure_result, invalid_input_result, success_result, tool_model,
    validate_sandbox_id,
};

/// Parameters for the block-by-time lookup.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlockByTimeParams {
    #[schemars(description = "ID of the sandbox whose explorer to query")]
    pub sandbox_id: String,

    #[serde(default)]
    #[schemars(description = "Unix timestamp in seconds (default: now)")]
    pub timestamp: Option<String>,
}

pub struct GetBlockByTimeTool;

impl GetBlockByTimeTool {
    pub const NAME: &'static str = "get-block-by-time";

    pub const DESCRIPTION: &'static str = "Get the block number by time";

    pub const FAILURE: &'static str = "Failed to fetch block by time";

    #[instrument(skip_all, fields(sandbox_id = %params.sandbox_id))]
    pub async fn execute(params: &BlockByTimeParams, api: &dyn SandboxApi) -> CallToolResult {
        let timestamp = match validate_sandbox_id(&params.sandbox_id)
            .and_then(|_| resolve_timestamp(params.timestamp.as_deref()))
        {
            Ok(timestamp) => timestamp,
            Err(e) => return invalid_input_result(e),
        };

        info!("Looking up block before timestamp {}", timestamp);

        let request = explorer_request(&params.sandbox_id, "block", "getblocknobytime")
            .with_query("closest", "before")
            .with_query("timestamp", timestamp);

        match query_explorer(api, request).await {
            Ok(envelope) => success_result(format!("Block number: {}", envelope.result_text())),
            Err(e) => failure_result(Self::FAILURE, &e),
        }
    }

    pub fn to_tool() -> Tool {
        tool_model::<BlockByTimeParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(api: Arc<dyn SandboxApi>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        api_route::<S, BlockByTimeParams>(Self::to_tool(), api, Self::run)
    }

    fn run(params: BlockByTimeParams, api: Arc<dyn SandboxApi>) -> BoxFuture<'static, CallToolResult> {
        async move { Self::execute(&params, api.as_ref()).await }.boxed()
    }
}

/// Use the given timestamp if it is a decimal number of seconds, or now if absent.
fn resolve_timestamp(timestamp: Option<&str>) -> Result<String, ToolError> {
    match timestamp.map(str::trim) {
        None | Some("") => Ok(chrono::Utc::now().timestamp().to_string()),
        Some(ts) if ts.parse::<u64>().is_ok() => Ok(ts.to_string()),
        Some(ts) => Err(ToolError::invalid_arguments(format!(
            "timestamp must be a unix timestamp in seconds: {}",
            ts
        ))),
    }
}
