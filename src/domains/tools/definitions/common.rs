//! Common utilities shared across the BuildBear tools.
//!
//! Input validation, result formatting and the route builder every tool uses
//! to bind its parameter struct to the shared [`SandboxApi`].

use futures::FutureExt;
use futures::future::BoxFuture;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::warn;

use crate::domains::api::{ApiError, SandboxApi};
use crate::domains::tools::ToolError;

/// EVM address: `0x` followed by 40 hex digits.
const ADDRESS_HEX_LENGTH: usize = 40;

/// Executes a tool against the API; the shape every tool's route dispatches to.
pub type ToolExecutor<P> = fn(P, Arc<dyn SandboxApi>) -> BoxFuture<'static, CallToolResult>;

/// Check that a sandbox ID is safe to use as a single URL path segment.
pub fn validate_sandbox_id(sandbox_id: &str) -> Result<(), ToolError> {
    if sandbox_id.is_empty() {
        return Err(ToolError::invalid_arguments("sandboxId must not be empty"));
    }
    if !sandbox_id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ToolError::invalid_arguments(format!(
            "sandboxId contains invalid characters: {}",
            sandbox_id
        )));
    }
    Ok(())
}

/// Check that `address` looks like an EVM address.
pub fn validate_address(address: &str) -> Result<(), ToolError> {
    let hex = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .ok_or_else(|| ToolError::invalid_arguments("address must start with 0x"))?;

    if hex.len() != ADDRESS_HEX_LENGTH || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ToolError::invalid_arguments(format!(
            "address must be 0x followed by {} hex digits: {}",
            ADDRESS_HEX_LENGTH, address
        )));
    }
    Ok(())
}

/// Create an error result for rejected input.
pub fn invalid_input_result(error: ToolError) -> CallToolResult {
    warn!("{}", error);
    CallToolResult::error(vec![Content::text(error.to_string())])
}

/// Create the fixed failure result for a tool, logging the underlying cause.
pub fn failure_result(message: &str, cause: &ApiError) -> CallToolResult {
    warn!("{}: {}", message, cause);
    error_result(message)
}

/// Create an error result with a fixed message.
pub fn error_result(message: &str) -> CallToolResult {
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Build the `Tool` metadata model for a parameter struct.
pub fn tool_model<P: JsonSchema + 'static>(name: &'static str, description: &'static str) -> Tool {
    Tool {
        name: name.into(),
        description: Some(description.into()),
        input_schema: cached_schema_for_type::<P>(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Create a ToolRoute that deserializes `P` from the call arguments and runs `execute`.
pub fn api_route<S, P>(tool: Tool, api: Arc<dyn SandboxApi>, execute: ToolExecutor<P>) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
    P: DeserializeOwned + Send + 'static,
{
    ToolRoute::new_dyn(tool, move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone();
        let api = api.clone();
        async move {
            let params: P = parse_arguments(args)?;
            Ok(execute(params, api).await)
        }
        .boxed()
    })
}

/// Deserialize tool call arguments; missing arguments read as `{}`.
pub fn parse_arguments<P: DeserializeOwned>(args: Option<JsonObject>) -> Result<P, McpError> {
    serde_json::from_value(serde_json::Value::Object(args.unwrap_or_default()))
        .map_err(|e| McpError::invalid_params(e.to_string(), None))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_sandbox_id() {
        assert!(validate_sandbox_id("quiet-bear-3f2a").is_ok());
        assert!(validate_sandbox_id("sb_01").is_ok());
        assert!(validate_sandbox_id("").is_err());
        assert!(validate_sandbox_id("../admin").is_err());
        assert!(validate_sandbox_id("abc?x=1").is_err());
    }

    #[test]
    fn test_validate_address() {
        assert!(validate_address("0x5FbDB2315678afecb367f032d93F642f64180aa3").is_ok());
        assert!(validate_address("5FbDB2315678afecb367f032d93F642f64180aa3").is_err());
        assert!(validate_address("0x5FbDB2315678afecb367f032d93F642f64180aa").is_err());
        assert!(validate_address("0xZZbDB2315678afecb367f032d93F642f64180aa3").is_err());
    }

    #[test]
    fn test_invalid_input_result_names_field() {
        let result = invalid_input_result(ToolError::invalid_arguments("sandboxId must not be empty"));
        assert_eq!(result.is_error, Some(true));
        assert!(test_support::result_text(&result).contains("sandboxId"));
    }

    #[test]
    fn test_parse_arguments_rejects_bad_types() {
        use crate::domains::tools::definitions::CreateSandboxParams;
        use rmcp::model::ErrorCode;

        let args = serde_json::json!({ "chainId": "one" });
        let err = parse_arguments::<CreateSandboxParams>(args.as_object().cloned()).unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);

        let err = parse_arguments::<CreateSandboxParams>(None).unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }

    #[test]
    fn test_parse_arguments_accepts_camel_case() {
        use crate::domains::tools::definitions::SandboxIdParams;

        let args = serde_json::json!({ "sandboxId": "bear-1" });
        let params: SandboxIdParams = parse_arguments(args.as_object().cloned()).unwrap();
        assert_eq!(params.sandbox_id, "bear-1");
    }

    #[test]
    fn test_failure_result_hides_cause() {
        let result = failure_result("Failed to delete sandbox", &ApiError::status(500, "boom"));
        assert_eq!(test_support::result_text(&result), "Failed to delete sandbox");
        assert_eq!(result.is_error, Some(true));
    }
}
