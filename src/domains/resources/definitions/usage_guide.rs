//! Usage guide resource definition.

use super::ResourceDefinition;
use crate::domains::resources::service::ResourceContent;

/// Tool usage guide (static Markdown).
pub struct UsageGuideResource;

impl ResourceDefinition for UsageGuideResource {
    const URI: &'static str = "buildbear://docs/usage";
    const NAME: &'static str = "Usage Guide";
    const DESCRIPTION: &'static str = "How to chain the BuildBear tools together";
    const MIME_TYPE: &'static str = "text/markdown";

    fn content() -> ResourceContent {
        ResourceContent::Text(GUIDE.to_string())
    }
}

const GUIDE: &str = r#"# BuildBear MCP Server

## Sandboxes

1. `get-available-networks` lists the networks that can be forked, with their chain IDs.
2. `create-sandbox` forks one of them. Pass `chainId`, and optionally `blockNumber`
   to pin the fork point, `customChainId` to override the reported chain ID, and
   `perfund` with addresses to fund.
3. `fetch-sandbox-details` returns the RPC, explorer and faucet URLs for a sandbox.
4. `get-sandbox-snapshots` lists the snapshots taken in a sandbox.
5. `delete-sandbox` tears the sandbox down.

## Explorer

Every explorer tool takes the `sandboxId` of the sandbox to inspect.

- `get-source-code` / `get-contract-abi`: verified contract source and ABI for `address`.
- `get-block-by-time`: the block closest before `timestamp` (unix seconds, default now).
- `get-account-balance`: native balance of `address`, in wei.

Failures come back as a short "Failed to ..." message; check the server log
for the underlying HTTP error.
"#;
