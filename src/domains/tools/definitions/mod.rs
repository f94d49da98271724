//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod common;
pub mod explorer;
pub mod sandbox;

pub use explorer::{
    AddressParams, BlockByTimeParams, GetAccountBalanceTool, GetBlockByTimeTool,
    GetContractAbiTool, GetSourceCodeTool,
};
pub use sandbox::{
    CreateSandboxParams, CreateSandboxTool, DeleteSandboxTool, FetchSandboxDetailsTool,
    GetAvailableNetworksTool, GetSandboxSnapshotsTool, NoParams, SandboxIdParams,
};
