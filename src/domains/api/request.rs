//! Outbound request description and URL building.

use reqwest::Method;
use serde_json::Value;

use super::error::{ApiError, ApiResult};

/// A single call against the BuildBear API, relative to the configured base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            body: Some(body),
            ..Self::new(Method::POST, path)
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Append a query parameter. Pairs are encoded in insertion order.
    pub fn with_query(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.query.push((name, value.into()));
        self
    }
}

/// Join `base` and the request path with exactly one `/`, then append the
/// form-urlencoded query string if any.
pub fn build_url(base: &str, request: &ApiRequest) -> ApiResult<String> {
    let base = base.trim_end_matches('/');
    if base.is_empty() {
        return Err(ApiError::invalid_url("API base URL is empty"));
    }

    let mut url = format!("{}/{}", base, request.path.trim_start_matches('/'));

    if !request.query.is_empty() {
        let query = serde_urlencoded::to_string(&request.query)
            .map_err(|e| ApiError::invalid_url(e.to_string()))?;
        url.push('?');
        url.push_str(&query);
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_url_normalizes_slashes() {
        let request = ApiRequest::get("/buildbear-sandbox/chains");
        let url = build_url("https://api.buildbear.io/v1/", &request).unwrap();
        assert_eq!(url, "https://api.buildbear.io/v1/buildbear-sandbox/chains");
    }

    #[test]
    fn test_build_url_without_trailing_slash() {
        let request = ApiRequest::delete("buildbear-sandbox/abc");
        let url = build_url("https://api.buildbear.io/v1", &request).unwrap();
        assert_eq!(url, "https://api.buildbear.io/v1/buildbear-sandbox/abc");
    }

    #[test]
    fn test_build_url_encodes_query_in_order() {
        let request = ApiRequest::get("explorer/sb-1")
            .with_query("module", "contract")
            .with_query("action", "getabi")
            .with_query("address", "0xabc&x=1");
        let url = build_url("http://localhost:8545", &request).unwrap();
        assert_eq!(
            url,
            "http://localhost:8545/explorer/sb-1?module=contract&action=getabi&address=0xabc%26x%3D1"
        );
    }

    #[test]
    fn test_build_url_rejects_empty_base() {
        let request = ApiRequest::get("chains");
        assert!(matches!(
            build_url("/", &request),
            Err(ApiError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_post_carries_body() {
        let request = ApiRequest::post("buildbear-sandbox", json!({ "chainId": 1 }));
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.body, Some(json!({ "chainId": 1 })));
        assert!(ApiRequest::get("x").body.is_none());
    }
}
