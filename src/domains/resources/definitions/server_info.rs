//! Server info resource definition.

use serde_json::{Value, json};

use super::ResourceDefinition;
use crate::core::config::Config;
use crate::domains::resources::service::{DynamicResourceType, ResourceContent};
use crate::domains::tools::ToolRegistry;

/// Server information resource (dynamic).
pub struct ServerInfoResource;

impl ResourceDefinition for ServerInfoResource {
    const URI: &'static str = "buildbear://server/info";
    const NAME: &'static str = "Server Information";
    const DESCRIPTION: &'static str =
        "Server version, BuildBear API endpoint, credential status and available tools";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::Dynamic(DynamicResourceType::ServerInfo)
    }
}

impl ServerInfoResource {
    /// Describe the running server. Never includes the API key itself.
    pub fn describe(config: &Config) -> Value {
        json!({
            "server": config.server.name,
            "version": config.server.version,
            "transport": config.transport.description(),
            "apiBaseUrl": config.api.base_url,
            "apiKeyConfigured": config.api.api_key.is_some(),
            "tools": ToolRegistry::tool_names(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_info_metadata() {
        assert_eq!(ServerInfoResource::URI, "buildbear://server/info");
        assert_eq!(ServerInfoResource::MIME_TYPE, "application/json");
    }

    #[test]
    fn test_describe_hides_api_key() {
        let mut config = Config::default();
        config.api.api_key = Some("bb_secret".to_string());

        let info = ServerInfoResource::describe(&config);

        assert_eq!(info["apiKeyConfigured"], json!(true));
        assert_eq!(info["tools"].as_array().map(Vec::len), Some(9));
        assert!(!info.to_string().contains("bb_secret"));
    }
}
