//! Get account balance tool.

use futures::FutureExt;
use futures::future::BoxFuture;
use rmcp::{
    handler::server::tool::ToolRoute,
    model::{CallToolResult, Tool},
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{AddressParams, explorer_request, query_explorer};
use crate::domains::api::SandboxApi;
use crate::domains::tools::definitions::common::{
    api_route, failure_result, invalid_input_result, success_result, tool_model,
    validate_address, validate_sandbox_id,
};

pub struct GetAccountBalanceTool;

impl GetAccountBalanceTool {
    pub const NAME: &'static str = "get-account-balance";

    pub const DESCRIPTION: &'static str =
        "Get the native token balance (in wei) of an account in a given sandbox";

    pub const FAILURE: &'static str = "Failed to fetch account balance";

    #[instrument(skip_all, fields(sandbox_id = %params.sandbox_id, address = %params.address))]
    pub async fn execute(params: &AddressParams, api: &dyn SandboxApi) -> CallToolResult {
        if let Err(e) = validate_sandbox_id(&params.sandbox_id)
            .and_then(|_| validate_address(&params.address))
        {
            return invalid_input_result(e);
        }

        info!("Fetching balance of {}", params.address);

        let request = explorer_request(&params.sandbox_id, "account", "balance")
            .with_query("address", params.address.as_str())
            .with_query("tag", "latest");

        match query_explorer(api, request).await {
            Ok(envelope) => success_result(format!(
                "Account balance (wei): {}",
                envelope.result_text()
            )),
            Err(e) => failure_result(Self::FAILURE, &e),
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
