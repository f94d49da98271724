//! Tool-specific error types.

use thiserror::Error;

/// Errors raised while validating tool input.
///
/// These never reach the API; the tool turns them into an error result that
/// names the offending field.
#[derive(Debug, Error, PartialEq)]
pub enum ToolError {
    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

impl ToolError {
    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }
}
