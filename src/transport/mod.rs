//! HTTP transport abstraction
//!
//! Repositories describe requests as [`ApiRequest`] values and hand them to
//! a [`Transport`]. Non-2xx statuses come back as
//! [`TransportFailure::Http`], so a successful [`ApiResponse`] always means
//! the call succeeded.

mod http;
#[cfg(test)]
pub mod mock;

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::TransportFailure;

pub use http::{DEFAULT_TIMEOUT_SECS, HttpTransport};

/// A request relative to a transport's base URL
///
/// `path` is the unencoded route, used for logging and mock routing.
/// `segments` holds the same route split into path segments; transports
/// percent-encode each one on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub segments: Vec<String>,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    /// `path` is a fixed route such as `users/search`; use
    /// [`ApiRequest::segment`] for caller-supplied values.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        let path = path.into().trim_matches('/').to_string();
        let segments = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        Self {
            method,
            path,
            segments,
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Append one path segment. `/`, `?`, `#` and `%` in `value` stay part
    /// of the segment.
    pub fn segment(mut self, value: impl ToString) -> Self {
        let value = value.to_string();
        if !self.path.is_empty() {
            self.path.push('/');
        }
        self.path.push_str(&value);
        self.segments.push(value);
        self
    }

    /// Append a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Append `page` and `size` parameters.
    pub fn page(self, page: u32, size: u32) -> Self {
        self.query("page", page).query("size", size)
    }

    /// Attach a JSON body.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, TransportFailure> {
        let value = serde_json::to_value(body)
            .map_err(|e| TransportFailure::Other(format!("Failed to encode request: {e}")))?;
        self.body = Some(value);
        Ok(self)
    }

    /// Value of the first query parameter named `key`.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// A successful (2xx) response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, TransportFailure> {
        serde_json::from_str(&self.body).map_err(|e| TransportFailure::Decode(e.to_string()))
    }
}

/// Executes requests against a remote backend.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, TransportFailure>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let request = ApiRequest::get("users/search")
            .query("query", "ana")
            .page(2, 20);

        assert_eq!(request.method, Method::GET);
        assert_eq!(request.query_value("query"), Some("ana"));
        assert_eq!(request.query_value("page"), Some("2"));
        assert_eq!(request.query_value("size"), Some("20"));
        assert!(request.body.is_none());
    }

    #[test]
    fn test_request_segments() {
        let request = ApiRequest::get("/users/username/").segment("ana#1");

        assert_eq!(request.path, "users/username/ana#1");
        assert_eq!(request.segments, vec!["users", "username", "ana#1"]);
    }

    #[test]
    fn test_segment_keeps_slashes_together() {
        let request = ApiRequest::get("users/username").segment("a/../me");
        assert_eq!(request.segments.len(), 3);
        assert_eq!(request.segments[2], "a/../me");
    }

    #[test]
    fn test_request_json_body() {
        let request = ApiRequest::post("likes/batch/counts")
            .json(&serde_json::json!({ "postIds": [1, 2] }))
            .unwrap();
        assert_eq!(request.body.unwrap()["postIds"][1], 2);
    }

    #[test]
    fn test_response_decode_failure() {
        let response = ApiResponse::new(200, "not json");
        let result: Result<serde_json::Value, _> = response.json();
        assert!(matches!(result, Err(TransportFailure::Decode(_))));
    }
}
