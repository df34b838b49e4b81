//! Scripted transport for unit tests
//!
//! Responses are queued per `(method, path)` route. Each call pops the
//! next response; the last one repeats. Unconfigured routes answer 404.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use tokio::sync::Mutex;

use super::{ApiRequest, ApiResponse, Transport};
use crate::error::TransportFailure;

type Scripted = Result<ApiResponse, TransportFailure>;

/// Mock transport for testing.
///
/// # Example
/// ```ignore
/// let mock = MockTransport::new()
///     .with_json(Method::GET, "users/7", r#"{"id":7, ...}"#)
///     .await;
///
/// let repo = UserRepository::new(Arc::new(mock.clone()));
/// repo.user_by_id(7).await?;
/// assert_eq!(mock.call_count().await, 1);
/// ```
#[derive(Clone, Default)]
pub struct MockTransport {
    routes: Arc<Mutex<HashMap<(Method, String), VecDeque<Scripted>>>>,
    /// Captured requests for test assertions
    captured: Arc<Mutex<Vec<ApiRequest>>>,
    /// Delay applied before every response
    delay: Arc<Mutex<Option<Duration>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for a route.
    pub async fn with_response(self, method: Method, path: &str, response: Scripted) -> Self {
        self.routes
            .lock()
            .await
            .entry((method, path.to_string()))
            .or_default()
            .push_back(response);
        self
    }

    /// Queue a 200 response with a JSON body.
    pub async fn with_json(self, method: Method, path: &str, body: &str) -> Self {
        self.with_response(method, path, Ok(ApiResponse::new(200, body)))
            .await
    }

    /// Queue an HTTP error status.
    pub async fn with_status(self, method: Method, path: &str, status: u16) -> Self {
        self.with_response(method, path, Err(TransportFailure::Http { status, body: None }))
            .await
    }

    /// Queue a transport-level failure.
    pub async fn with_failure(self, method: Method, path: &str, failure: TransportFailure) -> Self {
        self.with_response(method, path, Err(failure)).await
    }

    /// Delay every response.
    pub async fn with_delay(self, delay: Duration) -> Self {
        *self.delay.lock().await = Some(delay);
        self
    }

    /// Total number of executed requests.
    pub async fn call_count(&self) -> usize {
        self.captured.lock().await.len()
    }

    /// Number of executed requests for one route.
    pub async fn calls_to(&self, method: Method, path: &str) -> usize {
        self.captured
            .lock()
            .await
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    /// All executed requests, in order.
    pub async fn captured_requests(&self) -> Vec<ApiRequest> {
        self.captured.lock().await.clone()
    }

    pub async fn last_request(&self) -> Option<ApiRequest> {
        self.captured.lock().await.last().cloned()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, TransportFailure> {
        let key = (request.method.clone(), request.path.clone());
        self.captured.lock().await.push(request);

        let delay = *self.delay.lock().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let mut routes = self.routes.lock().await;
        match routes.get_mut(&key) {
            Some(queue) if queue.len() > 1 => queue
                .pop_front()
                .unwrap_or(Err(TransportFailure::Http { status: 404, body: None })),
            Some(queue) => queue
                .front()
                .cloned()
                .unwrap_or(Err(TransportFailure::Http { status: 404, body: None })),
            None => Err(TransportFailure::Http {
                status: 404,
                body: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_last_response_repeats() {
        let mock = MockTransport::new()
            .with_status(Method::GET, "feed", 500)
            .await
            .with_json(Method::GET, "feed", "{}")
            .await;

        assert!(mock.execute(ApiRequest::get("feed")).await.is_err());
        assert!(mock.execute(ApiRequest::get("feed")).await.is_ok());
        assert!(mock.execute(ApiRequest::get("feed")).await.is_ok());
        assert_eq!(mock.call_count().await, 3);
    }

    #[tokio::test]
    async fn test_unconfigured_route_is_not_found() {
        let mock = MockTransport::new();
        let failure = mock.execute(ApiRequest::delete("posts/1")).await.unwrap_err();
        assert_eq!(failure, TransportFailure::Http { status: 404, body: None });
        assert_eq!(mock.calls_to(Method::DELETE, "posts/1").await, 1);
    }
}
