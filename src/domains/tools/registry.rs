//! Tool Registry - the catalogue of every tool the server exposes.
//!
//! The router builds its routes independently; the tests below keep the two
//! lists in sync.

use rmcp::model::Tool;

use super::definitions::{
    CreateSandboxTool, DeleteSandboxTool, FetchSandboxDetailsTool, GetAccountBalanceTool,
    GetAvailableNetworksTool, GetBlockByTimeTool, GetContractAbiTool, GetSandboxSnapshotsTool,
    GetSourceCodeTool,
};

/// Tool registry - lists available tools and their metadata.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            CreateSandboxTool::NAME,
            FetchSandboxDetailsTool::NAME,
            GetSandboxSnapshotsTool::NAME,
            DeleteSandboxTool::NAME,
            GetAvailableNetworksTool::NAME,
            GetSourceCodeTool::NAME,
            GetContractAbiTool::NAME,
            GetBlockByTimeTool::NAME,
            GetAccountBalanceTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            CreateSandboxTool::to_tool(),
            FetchSandboxDetailsTool::to_tool(),
            GetSandboxSnapshotsTool::to_tool(),
            DeleteSandboxTool::to_tool(),
            GetAvailableNetworksTool::to_tool(),
            GetSourceCodeTool::to_tool(),
            GetContractAbiTool::to_tool(),
            GetBlockByTimeTool::to_tool(),
            GetAccountBalanceTool::to_tool(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_tool_names() {
        let names = ToolRegistry::tool_names();
        assert_eq!(names.len(), 9);
        assert!(names.contains(&"create-sandbox"));
        assert!(names.contains(&"fetch-sandbox-details"));
        assert!(names.contains(&"get-sandbox-snapshots"));
        assert!(names.contains(&"delete-sandbox"));
        assert!(names.contains(&"get-available-networks"));
        assert!(names.contains(&"get-source-code"));
        assert!(names.contains(&"get-contract-abi"));
        assert!(names.contains(&"get-block-by-time"));
        assert!(names.contains(&"get-account-balance"));
    }

    #[test]
    fn test_tools_match_names() {
        let tools = ToolRegistry::get_all_tools();
        let names = ToolRegistry::tool_names();
        assert_eq!(tools.len(), names.len());
        for (tool, name) in tools.iter().zip(names) {
            assert_eq!(tool.name.as_ref(), name);
            assert!(tool.description.is_some());
        }
    }

    #[test]
    fn test_schemas_declare_required_fields() {
        let tools = ToolRegistry::get_all_tools();
        let create = tools
            .iter()
            .find(|t| t.name.as_ref() == "create-sandbox")
            .unwrap();
        let required = create.input_schema.get("required").unwrap();
        assert_eq!(required, &serde_json::json!(["chainId"]));

        let source = tools
            .iter()
            .find(|t| t.name.as_ref() == "get-source-code")
            .unwrap();
        let properties = source.input_schema.get("properties").unwrap();
        assert!(properties.get("sandboxId").is_some());
        assert!(properties.get("address").is_some());
    }
}
