//! BuildBear REST client.
//!
//! Every tool talks to the remote API through the [`SandboxApi`] trait. The
//! production implementation is [`BuildBearClient`], backed by a shared
//! `reqwest::Client` so connections are pooled across tool calls.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use std::time::Duration;
use tracing::{debug, instrument, warn};

use super::error::{ApiError, ApiResult};
use super::request::{ApiRequest, build_url};
use super::response::ApiResponse;
use crate::core::config::ApiConfig;

/// User agent sent with every request.
pub const CLIENT_USER_AGENT: &str = "bb-mcp/1.0";

/// Anything that can execute an [`ApiRequest`] against the BuildBear API.
#[async_trait]
pub trait SandboxApi: Send + Sync {
    /// Send one request and decode the response body.
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse>;
}

/// reqwest-backed [`SandboxApi`] implementation.
#[derive(Clone)]
pub struct BuildBearClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl BuildBearClient {
    /// Build a client from API configuration.
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl SandboxApi for BuildBearClient {
    #[instrument(skip_all, fields(method = %request.method, path = %request.path))]
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let api_key = self.api_key.as_deref().ok_or(ApiError::MissingApiKey)?;
        let url = build_url(&self.base_url, &request)?;

        debug!("Sending BuildBear request: {} {}", request.method, url);

        let mut builder = self
            .http
            .request(request.method.clone(), &url)
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", api_key));

        if let Some(body) = &request.body {
            builder = builder.header(CONTENT_TYPE, "application/json").json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.text().await?;

        if !status.is_success() {
            warn!("BuildBear API returned {} for {}", status, url);
            return Err(ApiError::status(status.as_u16(), body));
        }

        ApiResponse::from_body(content_type.as_deref(), body)
    }
}
