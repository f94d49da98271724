//! Response payloads.
//!
//! Payloads are passed through as opaque JSON; only the fields the tools read
//! are modelled here.

use serde::Deserialize;
use serde_json::Value;

/// Response of `POST /buildbear-sandbox`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSandboxResponse {
    pub sandbox_id: String,
    #[serde(default)]
    pub rpc_url: Option<String>,
    #[serde(default)]
    pub explorer_url: Option<String>,
    #[serde(default)]
    pub faucet_url: Option<String>,
}

/// Etherscan-style envelope returned by the explorer endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ExplorerResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub result: Value,
}

impl ExplorerResponse {
    /// `result` as display text: strings verbatim, anything else as compact JSON.
    pub fn result_text(&self) -> String {
        match &self.result {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}
