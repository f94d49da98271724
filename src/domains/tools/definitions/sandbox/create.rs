//! Create sandbox tool.
//!
//! Forks a supported network into a fresh BuildBear sandbox.

use futures::FutureExt;
use futures::future::BoxFuture;
use rmcp::{
    handler::server::tool::ToolRoute,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::domains::api::{ApiRequest, SandboxApi, models::CreateSandboxResponse};
use crate::domains::tools::definitions::common::{
    api_route, error_result, failure_result, success_result, tool_model,
};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for sandbox creation. Serialized as-is into the request body.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSandboxParams {
    #[schemars(description = "Chain ID of the network to fork")]
    pub chain_id: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Block number to fork from (default: latest)")]
    pub block_number: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Chain ID the sandbox should report instead of the forked one")]
    pub custom_chain_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Addresses to prefund in the new sandbox")]
    pub perfund: Option<Vec<String>>,
}

// ============================================================================
// Tool Definition
// ============================================================================

pub struct CreateSandboxTool;

impl CreateSandboxTool {
    pub const NAME: &'static str = "create-sandbox";

    pub const DESCRIPTION: &'static str = "Create a new sandbox environment";

    pub const FAILURE: &'static str = "Failed to create sandbox";

    #[instrument(skip_all, fields(chain_id = params.chain_id))]
    pub async fn execute(params: &CreateSandboxParams, api: &dyn SandboxApi) -> CallToolResult {
        info!("Creating sandbox forked from chain {}", params.chain_id);

        let body = match serde_json::to_value(params) {
            Ok(body) => body,
            Err(e) => {
                warn!("Failed to serialize sandbox parameters: {}", e);
                return error_result(Self::FAILURE);
            }
        };

        let response = match api.send(ApiRequest::post("buildbear-sandbox", body)).await {
            Ok(response) => response,
            Err(e) => return failure_result(Self::FAILURE, &e),
        };

        let created: CreateSandboxResponse = match response
            .into_json()
            .map(serde_json::from_value)
        {
            Some(Ok(created)) => created,
            Some(Err(e)) => {
                warn!("Sandbox response missing sandboxId: {}", e);
                return error_result(Self::FAILURE);
            }
            None => {
                warn!("Sandbox creation returned a non-JSON body");
                return error_result(Self::FAILURE);
            }
        };

        info!("Sandbox {} created", created.sandbox_id);
        success_result(format_created(&created))
    }

    pub fn to_tool() -> Tool {
        tool_model::<CreateSandboxParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(api: Arc<dyn SandboxApi>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        api_route::<S, CreateSandboxParams>(Self::to_tool(), api, Self::run)
    }

    fn run(params: CreateSandboxParams, api: Arc<dyn SandboxApi>) -> BoxFuture<'static, CallToolResult> {
        async move { Self::execute(&params, api.as_ref()).await }.boxed()
    }
}

fn format_created(created: &CreateSandboxResponse) -> String {
    let mut text = format!("Sandbox created successfully: {}", created.sandbox_id);
    let urls = [
        ("RPC URL", &created.rpc_url),
        ("Explorer URL", &created.explorer_url),
        ("Faucet URL", &created.faucet_url),
    ];
    for (label, url) in urls {
        if let Some(url) = url {
            text.push_str(&format!("\n{}: {}", label, url));
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::api::{ApiError, mock::MockApi};
    use crate::domains::tools::definitions::common::test_support::{is_error, result_text};
    use reqwest::Method;
    use serde_json::json;

    fn params() -> CreateSandboxParams {
        serde_json::from_value(json!({ "chainId": 1 })).unwrap()
    }

    #[tokio::test]
    async fn test_create_posts_arguments_as_body() {
        let api = MockApi::new().with_json(json!({ "sandboxId": "bear-1" }));
        let params: CreateSandboxParams = serde_json::from_value(json!({
            "chainId": 137,
            "blockNumber": 50000000,
            "perfund": ["0x5FbDB2315678afecb367f032d93F642f64180aa3"]
        }))
        .unwrap();

        CreateSandboxTool::execute(&params, &api).await;

        let request = api.only_request();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.path, "buildbear-sandbox");
        assert_eq!(
            request.body,
            Some(json!({
                "chainId": 137,
                "blockNumber": 50000000,
                "perfund": ["0x5FbDB2315678afecb367f032d93F642f64180aa3"]
            }))
        );
    }

    #[tokio::test]
    async fn test_create_reports_sandbox_id_and_urls() {
        let api = MockApi::new().with_json(json!({
            "status": "live",
            "sandboxId": "bear-1",
            "rpcUrl": "https://rpc.buildbear.io/bear-1",
            "mnemonic": "test test test"
        }));

        let result = CreateSandboxTool::execute(&params(), &api).await;

        assert!(!is_error(&result));
        assert_eq!(
            result_text(&result),
            "Sandbox created successfully: bear-1\nRPC URL: https://rpc.buildbear.io/bear-1"
        );
    }

    #[tokio::test]
    async fn test_create_failure_on_http_error() {
        let api = MockApi::new().with_error(ApiError::status(401, "unauthorized"));
        let result = CreateSandboxTool::execute(&params(), &api).await;
        assert!(is_error(&result));
        assert_eq!(result_text(&result), "Failed to create sandbox");
    }

    #[tokio::test]
    async fn test_create_failure_without_sandbox_id() {
        let api = MockApi::new().with_text("ok");
        let result = CreateSandboxTool::execute(&params(), &api).await;
        assert_eq!(result_text(&result), "Failed to create sandbox");

        let api = MockApi::new().with_json(json!({ "status": "queued" }));
        let result = CreateSandboxTool::execute(&params(), &api).await;
        assert_eq!(result_text(&result), "Failed to create sandbox");
    }

    #[test]
    fn test_params_require_chain_id() {
        assert!(serde_json::from_value::<CreateSandboxParams>(json!({})).is_err());
        assert!(serde_json::from_value::<CreateSandboxParams>(json!({ "chainId": "one" })).is_err());
    }
}
