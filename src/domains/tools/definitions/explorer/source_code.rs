//! Get contract source code tool.

use futures::FutureExt;
use futures::future::BoxFuture;
use rmcp::{
    handler::server::tool::ToolRoute,
    model::{CallToolResult, Tool},
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::{AddressParams, explorer_request, query_explorer};
use crate::domains::api::{SandboxApi, pretty_json};
use crate::domains::tools::definitions::common::{
    api_route, error_result, failure_result, invalid_input_result, success_result, tool_model,
    validate_address, validate_sandbox_id,
};

pub struct GetSourceCodeTool;

impl GetSourceCodeTool {
    pub const NAME: &'static str = "get-source-code";

    pub const DESCRIPTION: &'static str = "Get the source code of a given contract";

    pub const FAILURE: &'static str = "Failed to fetch contract source code";

    #[instrument(skip_all, fields(sandbox_id = %params.sandbox_id, address = %params.address))]
    pub async fn execute(params: &AddressParams, api: &dyn SandboxApi) -> CallToolResult {
        if let Err(e) = validate_sandbox_id(&params.sandbox_id)
            .and_then(|_| validate_address(&params.address))
        {
            return invalid_input_result(e);
        }

        info!("Fetching source code for {}", params.address);

        let request = explorer_request(&params.sandbox_id, "contract", "getsourcecode")
            .with_query("address", params.address.as_str());

        let envelope = match query_explorer(api, request).await {
            Ok(envelope) => envelope,
            Err(e) => return failure_result(Self::FAILURE, &e),
        };

        // One entry per contract; the explorer always wraps it in an array.
        match envelope.result.as_array().and_then(|entries| entries.first()) {
            Some(entry) => success_result(format!("Contract source code: {}", pretty_json(entry))),
            None => {
                warn!("Explorer returned no source entry: {}", envelope.result_text());
                error_result(Self::FAILURE)
            }
        }
    }

    pub fn to_tool() -> Tool {
        tool_model::<AddressParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(api: Arc<dyn SandboxApi>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        api_route::<S, AddressParams>(Self::to_tool(), api, Self::run)
    }

    fn run(params: AddressParams, api: Arc<dyn SandboxApi>) -> BoxFuture<'static, CallToolResult> {
        async move { Self::execute(&params, api.as_ref()).await }.boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::api::mock::MockApi;
    use crate::domains::tools::definitions::common::test_support::{is_error, result_text};
    use serde_json::json;

    const ADDRESS: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";

    fn params() -> AddressParams {
        AddressParams {
            sandbox_id: "bear-1".to_string(),
            address: ADDRESS.to_string(),
        }
    }

    #[tokio::test]
    async fn test_source_code_uses_first_result() {
        let api = MockApi::new().with_json(json!({
            "status": "1",
            "message": "OK",
            "result": [{ "ContractName": "Token" }, { "ContractName": "Ignored" }]
        }));

        let result = GetSourceCodeTool::execute(&params(), &api).await;

        let request = api.only_request();
        assert_eq!(request.path, "explorer/bear-1");
        assert_eq!(
            request.query,
            vec![
                ("module", "contract".to_string()),
                ("action", "getsourcecode".to_string()),
                ("address", ADDRESS.to_string()),
            ]
        );
        assert!(!is_error(&result));
        assert_eq!(
            result_text(&result),
            "Contract source code: {\n  \"ContractName\": \"Token\"\n}"
        );
    }

    #[tokio::test]
    async fn test_source_code_empty_result_is_failure() {
        let api = MockApi::new().with_json(json!({ "status": "0", "result": [] }));
        let result = GetSourceCodeTool::execute(&params(), &api).await;
        assert!(is_error(&result));
        assert_eq!(result_text(&result), "Failed to fetch contract source code");

        let api = MockApi::new().with_json(json!({ "status": "0", "result": "Invalid address" }));
        let result = GetSourceCodeTool::execute(&params(), &api).await;
        assert_eq!(result_text(&result), "Failed to fetch contract source code");
    }

    #[tokio::test]
    async fn test_source_code_rejects_bad_address() {
        let api = MockApi::new();
        let params = AddressParams {
            sandbox_id: "bear-1".to_string(),
            address: "not-an-address".to_string(),
        };
        let result = GetSourceCodeTool::execute(&params, &api).await;
        assert!(is_error(&result));
        assert!(result_text(&result).contains("address"));
        assert!(api.requests().is_empty());
    }
}
