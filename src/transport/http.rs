//! reqwest-backed transport

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, Url};

use super::{ApiRequest, ApiResponse, Transport};
use crate::error::TransportFailure;
use crate::session::TokenStore;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Transport that talks HTTP to a fixed base URL.
///
/// When built with a [`TokenStore`], the current access token is sent as
/// `Authorization: Bearer <token>` on every request.
#[derive(Clone)]
pub struct HttpTransport {
    http: HttpClient,
    base_url: Url,
    tokens: Option<Arc<TokenStore>>,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, TransportFailure> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .user_agent(concat!("agrohub/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let base_url = base_url.into();
        let parsed = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| TransportFailure::Other(format!("Invalid base URL {base_url}: {e}")))?;
        if parsed.cannot_be_a_base() {
            return Err(TransportFailure::Other(format!(
                "Invalid base URL {base_url}: not a hierarchical URL"
            )));
        }

        Ok(Self {
            http,
            base_url: parsed,
            tokens: None,
        })
    }

    /// Attach bearer tokens from `tokens` to every request.
    pub fn with_tokens(mut self, tokens: Arc<TokenStore>) -> Self {
        self.tokens = Some(tokens);
        self
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Base URL with `segments` appended, each percent-encoded.
    fn url(&self, segments: &[String]) -> Result<Url, TransportFailure> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| TransportFailure::Other(format!("Invalid base URL {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, TransportFailure> {
        let url = self.url(&request.segments)?;
        log::debug!("{} {}", request.method, url);

        let mut builder = self.http.request(request.method.clone(), url.clone());
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        if let Some(tokens) = &self.tokens
            && let Some(token) = tokens.access_token().await
        {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            // The body is only used for 400 messages; a read failure is not fatal.
            let body = response.text().await.ok();
            log::debug!("{} {} returned {}", request.method, url, status);
            return Err(TransportFailure::Http {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        Ok(ApiResponse::new(status.as_u16(), body))
    }
}
