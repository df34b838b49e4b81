//! Building blocks shared by the repositories

use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::cache::BoundedTtlCache;
use crate::classify::{ErrorMessages, classify};
use crate::error::{AppError, Result};
use crate::transport::{ApiRequest, Transport};

/// A transport paired with one repository's error messages.
///
/// This is the single place transport failures become [`AppError`]s.
#[derive(Clone)]
pub struct Endpoint {
    transport: Arc<dyn Transport>,
    messages: ErrorMessages,
    resource: &'static str,
}

impl Endpoint {
    pub fn new(transport: Arc<dyn Transport>, messages: ErrorMessages, resource: &'static str) -> Self {
        Self {
            transport,
            messages,
            resource,
        }
    }

    /// Execute `request` and decode the JSON body.
    pub async fn fetch<D: DeserializeOwned>(&self, request: ApiRequest) -> Result<D> {
        let label = format!("{} {}", request.method, request.path);
        let response = self
            .transport
            .execute(request)
            .await
            .map_err(|failure| self.fail(&label, &failure))?;

        response.json().map_err(|failure| self.fail(&label, &failure))
    }

    /// Execute `request`, ignoring any body.
    pub async fn send(&self, request: ApiRequest) -> Result<()> {
        let label = format!("{} {}", request.method, request.path);
        self.transport
            .execute(request)
            .await
            .map(|_| ())
            .map_err(|failure| self.fail(&label, &failure))
    }

    fn fail(&self, label: &str, failure: &crate::error::TransportFailure) -> AppError {
        let error = classify(failure, &self.messages);
        log::warn!(
            "{} request {label} failed: {failure} ({}: {})",
            self.resource,
            error.kind(),
            error
        );
        error
    }
}

/// Cache-aside read: return the cached value for `key`, or run `load` and
/// cache its successful result. Failures leave the cache untouched.
pub async fn cache_aside<K, V, F, Fut>(cache: &BoundedTtlCache<K, V>, key: K, load: F) -> Result<V>
where
    K: Eq + Hash + Clone + std::fmt::Debug,
    V: Clone,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<V>>,
{
    if let Some(hit) = cache.get(&key) {
        log::debug!("Cache hit for {key:?}");
        return Ok(hit);
    }

    log::debug!("Cache miss for {key:?}");
    let value = load().await?;
    cache.put(key, value.clone());
    Ok(value)
}

/// Trimmed `value`, or a validation error when it is blank.
pub fn require_text(value: &str, message: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(message.to_string()));
    }
    Ok(trimmed.to_string())
}

pub const INVALID_EMAIL: &str = "Invalid email format";

/// Loose structural email check: `local@domain.tld`, no whitespace.
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && tld.len() >= 2,
        None => false,
    }
}

pub fn require_email(value: &str) -> Result<String> {
    if !is_valid_email(value) {
        return Err(AppError::Validation(INVALID_EMAIL.to_string()));
    }
    Ok(value.trim().to_string())
}
