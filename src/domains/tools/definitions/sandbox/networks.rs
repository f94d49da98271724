//! Get available networks tool.

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

use crate::domains::api::{ApiRequest, SandboxApi};
use crate::domains::tools::definitions::common::{
    api_route, failure_result, success_result, tool_model,
};

/// This tool takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct NoParams {}

pub struct GetAvailableNetworksTool;

impl GetAvailableNetworksTool {
    pub const NAME: &'static str = "get-available-networks";

    pub const DESCRIPTION: &'static str = "Get all available networks for sandbox creation";

    pub const FAILURE: &'static str = "Failed to fetch available networks";

    #[instrument(skip_all)]
    pub async fn execute(api: &dyn SandboxApi) -> CallToolResult {
        info!("Fetching available networks");

        match api.send(ApiRequest::get("buildbear-sandbox/chains")).await {
            Ok(response) => success_result(format!(
                "Available networks: {}",
                response.to_pretty_string()
            )),
            Err(e) => failure_result(Self::FAILURE, &e),
        }
    }

    pub fn to_tool() -> Tool {
        tool_model::<NoParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(api: Arc<dyn SandboxApi>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        api_route::<S, NoParams>(Self::to_tool(), api, Self::run)
    }

    fn run(_params: NoParams, api: Arc<dyn SandboxApi>) -> BoxFuture<'static, CallToolResult> {
        async move { Self::execute(api.as_ref()).await }.boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::api::{ApiError, mock::MockApi};
    use crate::domains::tools::definitions::common::test_support::{is_error, result_text};
    use serde_json::json;

    #[tokio::test]
    async fn test_networks_listed() {
        let api = MockApi::new().with_json(json!([{ "name": "Ethereum" }]));

        let result = GetAvailableNetworksTool::execute(&api).await;

        assert_eq!(api.only_request().path, "buildbear-sandbox/chains");
        assert!(!is_error(&result));
        assert!(result_text(&result).starts_with("Available networks: ["));
        assert!(result_text(&result).contains("\"name\": \"Ethereum\""));
    }

    #[tokio::test]
    async fn test_networks_failure() {
        let api = MockApi::new().with_error(ApiError::status(500, ""));
        let result = GetAvailableNetworksTool::execute(&api).await;
        assert!(is_error(&result));
        assert_eq!(result_text(&result), "Failed to fetch available networks");
    }

    #[test]
    fn test_no_params_accepts_empty_object() {
        assert!(serde_json::from_value::<NoParams>(json!({})).is_ok());
    }
}
