//! Delete sandbox tool.
//!
//! The API answers deletes with a plain-text confirmation, which is forwarded
//! to the client unchanged. An empty confirmation counts as a failure.

use futures::FutureExt;
use futures::future::BoxFuture;
use rmcp::{
    handler::server::tool::ToolRoute,
    model::{CallToolResult, Tool},
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::SandboxIdParams;
use crate::domains::api::{ApiRequest, SandboxApi};
use crate::domains::tools::definitions::common::{
    api_route, error_result, failure_result, invalid_input_result, success_result, tool_model,
    validate_sandbox_id,
};

pub struct DeleteSandboxTool;

impl DeleteSandboxTool {
    pub const NAME: &'static str = "delete-sandbox";

    pub const DESCRIPTION: &'static str = "Delete a given sandbox environment";

    pub const FAILURE: &'static str = "Failed to delete sandbox";

    #[instrument(skip_all, fields(sandbox_id = %params.sandbox_id))]
    pub async fn execute(params: &SandboxIdParams, api: &dyn SandboxApi) -> CallToolResult {
        if let Err(e) = validate_sandbox_id(&params.sandbox_id) {
            return invalid_input_result(e);
        }

        info!("Deleting sandbox {}", params.sandbox_id);

        let path = format!("buildbear-sandbox/{}", params.sandbox_id);
        match api.send(ApiRequest::delete(path)).await {
            Ok(response) => {
                let confirmation = response.to_pretty_string();
                if confirmation.trim().is_empty() {
                    warn!("Empty delete confirmation for sandbox {}", params.sandbox_id);
                    return error_result(Self::FAILURE);
                }
                info!("Sandbox {} deleted", params.sandbox_id);
                success_result(confirmation)
            }
            Err(e) => failure_result(Self::FAILURE, &e),
        }
    }

    pub fn to_tool() -> Tool {
        tool_model::<SandboxIdParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(api: Arc<dyn SandboxApi>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        api_route::<S, SandboxIdParams>(Self::to_tool(), api, Self::run)
    }

    fn run(params: SandboxIdParams, api: Arc<dyn SandboxApi>) -> BoxFuture<'static, CallToolResult> {
        async move { Self::execute(&params, api.as_ref()).await }.boxed()
    }
}
