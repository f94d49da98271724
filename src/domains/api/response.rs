//! Response bodies and content negotiation.
//!
//! The API answers some endpoints with JSON and others (notably deletes) with
//! plain text, so the body is decoded according to its `Content-Type`.

use serde_json::Value;

use super::error::ApiResult;

/// A decoded response body.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    Json(Value),
    Text(String),
}

impl ApiResponse {
    /// Decode `body` as JSON when the content type says so, otherwise keep it as text.
    pub fn from_body(content_type: Option<&str>, body: String) -> ApiResult<Self> {
        let is_json = content_type
            .map(|ct| ct.to_ascii_lowercase().contains("application/json"))
            .unwrap_or(false);

        if is_json {
            Ok(Self::Json(serde_json::from_str(&body)?))
        } else {
            Ok(Self::Text(body))
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    pub fn into_json(self) -> Option<Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    /// Render for display: JSON pretty-printed with two-space indent, text verbatim.
    pub fn to_pretty_string(&self) -> String {
        match self {
            Self::Json(value) => pretty_json(value),
            Self::Text(text) => text.clone(),
        }
    }
}

/// Pretty-print a JSON value, falling back to the compact form.
pub fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::api::ApiError;
    use serde_json::json;

    #[test]
    fn test_json_content_type_is_parsed() {
        let response = ApiResponse::from_body(
            Some("application/json; charset=utf-8"),
            r#"{"sandboxId":"abc"}"#.to_string(),
        )
        .unwrap();
        assert_eq!(response, ApiResponse::Json(json!({ "sandboxId": "abc" })));
    }

    #[test]
    fn test_other_content_types_are_text() {
        let response =
            ApiResponse::from_body(Some("text/html"), "Sandbox deleted".to_string()).unwrap();
        assert_eq!(response, ApiResponse::Text("Sandbox deleted".to_string()));

        let response = ApiResponse::from_body(None, r#"{"a":1}"#.to_string()).unwrap();
        assert!(response.as_json().is_none());
    }

    #[test]
    fn test_malformed_json_is_decode_error() {
        let result = ApiResponse::from_body(Some("application/json"), "{not json".to_string());
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_pretty_string() {
        let response = ApiResponse::Json(json!({ "a": 1 }));
        assert_eq!(response.to_pretty_string(), "{\n  \"a\": 1\n}");
        let response = ApiResponse::Text("ok".to_string());
        assert_eq!(response.to_pretty_string(), "ok");
    }
}
