//! Error types for the AgroHub data layer

use thiserror::Error;

use crate::classify::{ErrorMessages, classify};

/// Result type returned by every repository operation
pub type Result<T> = std::result::Result<T, AppError>;

/// Domain-level errors surfaced to callers.
///
/// The set is closed: every transport failure maps to exactly one variant,
/// and each variant carries a display-ready message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Authentication(String),

    #[error("{0}")]
    Authorization(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    ServerError(String),

    #[error("{0}")]
    Network(String),

    #[error("{0}")]
    Unknown(String),
}

impl AppError {
    /// The user-facing message carried by this error
    pub fn message(&self) -> &str {
        match self {
            AppError::Validation(msg)
            | AppError::Authentication(msg)
            | AppError::Authorization(msg)
            | AppError::NotFound(msg)
            | AppError::ServerError(msg)
            | AppError::Network(msg)
            | AppError::Unknown(msg) => msg,
        }
    }

    /// Short, stable name of the variant (used in logs and JSON output)
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation",
            AppError::Authentication(_) => "authentication",
            AppError::Authorization(_) => "authorization",
            AppError::NotFound(_) => "not_found",
            AppError::ServerError(_) => "server_error",
            AppError::Network(_) => "network",
            AppError::Unknown(_) => "unknown",
        }
    }
}

/// Failures raised by the transport layer.
///
/// Decided once at the transport boundary so the classifier matches a
/// finite enum instead of library-specific error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportFailure {
    #[error("HTTP {status}")]
    Http { status: u16, body: Option<String> },

    #[error("Request timed out")]
    Timeout,

    #[error("Unable to resolve host")]
    UnresolvedHost,

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for TransportFailure {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportFailure::Timeout
        } else if err.is_connect() && is_dns_failure(&err) {
            TransportFailure::UnresolvedHost
        } else if err.is_decode() {
            TransportFailure::Decode(err.to_string())
        } else if err.is_builder() {
            TransportFailure::Other(err.to_string())
        } else {
            TransportFailure::Io(err.to_string())
        }
    }
}

/// Walk the source chain looking for a resolver failure.
///
/// reqwest exposes no typed resolver error, so this matches on message
/// text and is best-effort. A miss leaves the failure as `Io`; both map to
/// `AppError::Network`, so only the message text differs.
fn is_dns_failure(err: &(dyn std::error::Error + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(e) = current {
        let text = e.to_string().to_lowercase();
        if text.contains("dns error")
            || text.contains("failed to lookup address")
            || text.contains("name or service not known")
            || text.contains("no such host")
        {
            return true;
        }
        current = e.source();
    }
    false
}

/// Failures that never reached the classifier (e.g. request encoding) use
/// the default message table.
impl From<TransportFailure> for AppError {
    fn from(failure: TransportFailure) -> Self {
        classify(&failure, &ErrorMessages::default())
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("Could not determine home directory")]
    NoHome,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
