//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the tools and resources domains.
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool
//! and routed through the ToolRouter built in `domains/tools/router.rs`.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::config::Config;
use crate::domains::{
    api::{BuildBearClient, SandboxApi},
    resources::{ResourceError, ResourceService},
    tools::build_tool_router,
};

const INSTRUCTIONS: &str = "BuildBear sandbox tools. Create, inspect and delete forked-chain \
sandboxes and query each sandbox's block explorer. Start with get-available-networks to find \
a chainId for create-sandbox; the other tools take the returned sandboxId.";

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server talking to the BuildBear API described by `config`.
    pub fn new(config: Config) -> crate::Result<Self> {
        config.validate()?;
        if config.api.api_key.is_none() {
            warn!(
                "MCP_BUILDBEAR_API_KEY not set - every tool call will fail until \
                 an API key is configured"
            );
        }
        let client = BuildBearClient::new(&config.api)?;
        Ok(Self::with_api(config, Arc::new(client)))
    }

    /// Create a server backed by an arbitrary [`SandboxApi`] implementation.
    pub fn with_api(config: Config, api: Arc<dyn SandboxApi>) -> Self {
        let config = Arc::new(config);

        Self {
            tool_router: build_tool_router::<Self>(api),
            resource_service: Arc::new(ResourceService::new(config.clone())),
            config,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }
}

#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self.resource_service.list_resources().await;
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .await
            .map_err(resource_error)
    }
}

fn resource_error(error: ResourceError) -> McpError {
    match error {
        ResourceError::NotFound(_) => McpError::resource_not_found(error.to_string(), None),
        ResourceError::Internal(_) => McpError::internal_error(error.to_string(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::api::mock::MockApi;

    fn test_server() -> McpServer {
        McpServer::with_api(Config::default(), Arc::new(MockApi::new()))
    }

    #[test]
    fn test_server_info_advertises_tools_and_resources() {
        let info = test_server().get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_some());
        assert!(info.capabilities.prompts.is_none());
        assert!(info.instructions.unwrap().contains("create-sandbox"));
    }

    #[test]
    fn test_server_routes_all_tools() {
        let server = test_server();
        assert_eq!(server.tool_router.list_all().len(), 9);
        assert_eq!(server.name(), "buildbear");
    }

    #[test]
    fn test_resource_errors_map_to_mcp_codes() {
        let not_found = resource_error(ResourceError::not_found("buildbear://nope"));
        assert_eq!(not_found.code, ErrorCode::RESOURCE_NOT_FOUND);

        let internal = resource_error(ResourceError::internal("serialization failed"));
        assert_eq!(internal.code, ErrorCode::INTERNAL_ERROR);
        assert!(internal.message.contains("serialization failed"));
    }

    #[test]
    fn test_new_rejects_invalid_base_url() {
        let mut config = Config::default();
        config.api.base_url = "ftp://example.com".to_string();
        assert!(McpServer::new(config).is_err());
    }

    #[test]
    fn test_new_builds_client_without_api_key() {
        assert!(McpServer::new(Config::default()).is_ok());
    }
}
