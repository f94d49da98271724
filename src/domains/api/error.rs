//! API-specific error types.

use thiserror::Error;

/// A specialized Result type for BuildBear API calls.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Errors that can occur while talking to the BuildBear API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No API key was configured, so the request was never sent.
    #[error("BuildBear API key is not configured (set MCP_BUILDBEAR_API_KEY)")]
    MissingApiKey,

    /// The request URL could not be built.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    /// The request failed before a response was received.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP error! status: {status}")]
    Status { status: u16, body: String },

    /// The server claimed JSON but the body did not parse.
    #[error("Failed to decode JSON response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

impl ApiError {
    /// Create a new status error.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Create a new invalid URL error.
    pub fn invalid_url(msg: impl Into<String>) -> Self {
        Self::InvalidUrl(msg.into())
    }
}
