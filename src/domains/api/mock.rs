//! Scripted [`SandboxApi`] for tests.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use super::client::SandboxApi;
use super::error::{ApiError, ApiResult};
use super::request::ApiRequest;
use super::response::ApiResponse;

/// Replays queued responses in order and records every request it receives.
#[derive(Default)]
pub struct MockApi {
    responses: Mutex<VecDeque<ApiResult<ApiResponse>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(self, value: serde_json::Value) -> Self {
        self.push(Ok(ApiResponse::Json(value)))
    }

    pub fn with_text(self, text: &str) -> Self {
        self.push(Ok(ApiResponse::Text(text.to_string())))
    }

    pub fn with_error(self, error: ApiError) -> Self {
        self.push(Err(error))
    }

    fn push(self, response: ApiResult<ApiResponse>) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    /// All requests received so far.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The single request received; panics if there were zero or several.
    pub fn only_request(&self) -> ApiRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

#[async_trait]
impl SandboxApi for MockApi {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::status(500, "no scripted response")))
    }
}
