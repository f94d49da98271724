//! Resource service implementation.
//!
//! The ResourceService maintains the registry of available resources and
//! handles read requests. Resources are defined in `definitions/` and
//! registered via `registry.rs`.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;

use super::definitions::ServerInfoResource;
use super::error::ResourceError;
use super::registry::get_all_resources;
use crate::core::config::Config;

/// Service for managing and accessing resources.
pub struct ResourceService {
    config: Arc<Config>,

    /// Key: resource URI.
    resources: BTreeMap<String, ResourceEntry>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The content provider for this resource.
    pub content: ResourceContent,
}

/// Different types of resource content.
#[derive(Debug, Clone)]
pub enum ResourceContent {
    /// Static text content.
    Text(String),

    /// Content computed at read time.
    Dynamic(DynamicResourceType),
}

/// Types of dynamic resources.
#[derive(Debug, Clone)]
pub enum DynamicResourceType {
    /// Server and API configuration summary.
    ServerInfo,
}

impl ResourceService {
    /// Create a new ResourceService with every registered resource.
    pub fn new(config: Arc<Config>) -> Self {
        info!("Initializing ResourceService");

        let resources = get_all_resources()
            .into_iter()
            .map(|entry| (entry.resource.raw.uri.clone(), entry))
            .collect();

        Self { config, resources }
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .resources
            .get(uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let content = match &entry.content {
            ResourceContent::Text(text) => ResourceContents::text(text, uri),
            ResourceContent::Dynamic(dynamic_type) => {
                self.resolve_dynamic_content(uri, dynamic_type)?
            }
        };

        Ok(ReadResourceResult {
            contents: vec![content],
        })
    }

    fn resolve_dynamic_content(
        &self,
        uri: &str,
        dynamic_type: &DynamicResourceType,
    ) -> Result<ResourceContents, ResourceError> {
        match dynamic_type {
            DynamicResourceType::ServerInfo => {
                let info = ServerInfoResource::describe(&self.config);
                Ok(ResourceContents::text(
                    serde_json::to_string_pretty(&info)
                        .map_err(|e| ResourceError::internal(e.to_string()))?,
                    uri,
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ResourceService {
        ResourceService::new(Arc::new(Config::default()))
    }

    fn text_of(result: &ReadResourceResult) -> &str {
        match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => text,
            _ => panic!("Expected text contents"),
        }
    }

    #[tokio::test]
    async fn test_list_resources() {
        let resources = service().list_resources().await;
        assert_eq!(resources.len(), 2);
    }

    #[tokio::test]
    async fn test_read_server_info() {
        let result = service()
            .read_resource("buildbear://server/info")
            .await
            .unwrap();
        let info: serde_json::Value = serde_json::from_str(text_of(&result)).unwrap();
        assert_eq!(info["apiBaseUrl"], "https://api.buildbear.io/v1");
        assert_eq!(info["apiKeyConfigured"], false);
    }

    #[test]
    fn test_read_usage_guide() {
        let service = service();
        let result = tokio_test::block_on(service.read_resource("buildbear://docs/usage")).unwrap();
        assert!(text_of(&result).starts_with("# BuildBear MCP Server"));
    }

    #[tokio::test]
    async fn test_read_nonexistent_resource() {
        let result = service().read_resource("buildbear://nope").await;
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }
}
