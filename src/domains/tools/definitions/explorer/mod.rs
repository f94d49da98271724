//! Explorer API tools.
//!
//! Each sandbox exposes an Etherscan-compatible explorer at
//! `/explorer/{sandboxId}`, selected with `module` and `action` query
//! parameters:
//! - `source_code`: verified contract source (`contract/getsourcecode`)
//! - `contract_abi`: verified contract ABI (`contract/getabi`)
//! - `block_by_time`: block number closest before a timestamp (`block/getblocknobytime`)
//! - `balance`: native balance of an account (`account/balance`)

pub mod balance;
pub mod block_by_time;
pub mod contract_abi;
pub mod source_code;

use schemars::JsonSchema;
use serde::Deserialize;
use tracing::debug;

use crate::domains::api::{ApiRequest, ApiResponse, ApiResult, SandboxApi, models::ExplorerResponse};

pub use balance::GetAccountBalanceTool;
pub use block_by_time::{BlockByTimeParams, GetBlockByTimeTool};
pub use contract_abi::GetContractAbiTool;
pub use source_code::GetSourceCodeTool;

/// Parameters for tools that query an address on a sandbox's explorer.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressParams {
    #[schemars(description = "ID of the sandbox whose explorer to query")]
    pub sandbox_id: String,

    #[schemars(description = "Contract or account address (0x-prefixed)")]
    pub address: String,
}

/// Build an explorer query for `sandbox_id` with the given module and action.
pub fn explorer_request(sandbox_id: &str, module: &str, action: &str) -> ApiRequest {
    ApiRequest::get(format!("explorer/{}", sandbox_id))
        .with_query("module", module)
        .with_query("action", action)
}

/// Send an explorer query and decode the Etherscan-style envelope.
///
/// Some explorer deployments answer with a non-JSON content type, so text
/// bodies are parsed as JSON too.
pub async fn query_explorer(api: &dyn SandboxApi, request: ApiRequest) -> ApiResult<ExplorerResponse> {
    let envelope: ExplorerResponse = match api.send(request).await? {
        ApiResponse::Json(value) => serde_json::from_value(value)?,
        ApiResponse::Text(text) => serde_json::from_str(&text)?,
    };

    if envelope.status.as_deref() == Some("0") {
        debug!(
            "Explorer reported status 0: {}",
            envelope.message.as_deref().unwrap_or("no message")
        );
    }

    Ok(envelope)
}
