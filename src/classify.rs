//! Transport failure classification
//!
//! One fixed mapping from [`TransportFailure`] to [`AppError`], shared by
//! every repository. Repositories may override message text through
//! [`ErrorMessages`], never the variant.

use crate::api::ErrorResponse;
use crate::error::{AppError, TransportFailure};

pub const INVALID_REQUEST: &str = "Invalid request";
pub const AUTHENTICATION_REQUIRED: &str = "Authentication required";
pub const ACCESS_DENIED: &str = "Access denied";
pub const NOT_FOUND: &str = "The requested resource was not found";
pub const CONFLICT: &str = "Resource already exists";
pub const SERVER_ERROR: &str = "Server error. Please try again later.";
pub const TIMEOUT: &str = "Request timed out. Please check your connection.";
pub const UNRESOLVED_HOST: &str = "Unable to reach server. Please check your internet connection.";
pub const NETWORK_ERROR: &str = "Network error occurred. Please check your connection.";
pub const UNEXPECTED_RESPONSE: &str = "Received an unexpected response from the server";

/// Per-repository message overrides.
///
/// # Example
/// ```
/// use agrohub::classify::ErrorMessages;
///
/// let messages = ErrorMessages::new()
///     .not_found("User not found")
///     .conflict("User already exists");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMessages {
    unauthorized: Option<&'static str>,
    forbidden: Option<&'static str>,
    not_found: Option<&'static str>,
    conflict: Option<&'static str>,
}

impl ErrorMessages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Message for HTTP 401.
    pub fn unauthorized(mut self, message: &'static str) -> Self {
        self.unauthorized = Some(message);
        self
    }

    /// Message for HTTP 403.
    pub fn forbidden(mut self, message: &'static str) -> Self {
        self.forbidden = Some(message);
        self
    }

    /// Message for HTTP 404.
    pub fn not_found(mut self, message: &'static str) -> Self {
        self.not_found = Some(message);
        self
    }

    /// Message for HTTP 409.
    pub fn conflict(mut self, message: &'static str) -> Self {
        self.conflict = Some(message);
        self
    }
}

/// Map a transport failure to its domain error. Total; never panics.
pub fn classify(failure: &TransportFailure, messages: &ErrorMessages) -> AppError {
    match failure {
        TransportFailure::Http { status, body } => {
            classify_status(*status, body.as_deref(), messages)
        }
        TransportFailure::Timeout => AppError::Network(TIMEOUT.to_string()),
        TransportFailure::UnresolvedHost => AppError::Network(UNRESOLVED_HOST.to_string()),
        TransportFailure::Io(_) => AppError::Network(NETWORK_ERROR.to_string()),
        TransportFailure::Decode(_) => AppError::Unknown(UNEXPECTED_RESPONSE.to_string()),
        TransportFailure::Other(detail) => AppError::Unknown(if detail.trim().is_empty() {
            "An unknown error occurred".to_string()
        } else {
            detail.clone()
        }),
    }
}

fn classify_status(status: u16, body: Option<&str>, messages: &ErrorMessages) -> AppError {
    match status {
        400 => AppError::Validation(validation_message(body)),
        401 => AppError::Authentication(
            messages.unauthorized.unwrap_or(AUTHENTICATION_REQUIRED).to_string(),
        ),
        403 => AppError::Authorization(messages.forbidden.unwrap_or(ACCESS_DENIED).to_string()),
        404 => AppError::NotFound(messages.not_found.unwrap_or(NOT_FOUND).to_string()),
        409 => AppError::Validation(messages.conflict.unwrap_or(CONFLICT).to_string()),
        500..=599 => AppError::ServerError(SERVER_ERROR.to_string()),
        other => AppError::Unknown(format!("An unexpected error occurred (HTTP {other})")),
    }
}

/// Extract a validation message from a 400 response body.
///
/// Prefers the backend's `message` field, then the raw body, then
/// [`INVALID_REQUEST`].
pub fn validation_message(body: Option<&str>) -> String {
    let Some(body) = body.map(str::trim).filter(|b| !b.is_empty()) else {
        return INVALID_REQUEST.to_string();
    };

    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(parsed) => parsed
            .message
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| INVALID_REQUEST.to_string()),
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn http(status: u16) -> TransportFailure {
        TransportFailure::Http { status, body: None }
    }

    fn defaults() -> ErrorMessages {
        ErrorMessages::default()
    }

    #[test]
    fn test_status_mapping() {
        let m = defaults();
        assert!(matches!(classify(&http(400), &m), AppError::Validation(_)));
        assert!(matches!(classify(&http(401), &m), AppError::Authentication(_)));
        assert!(matches!(classify(&http(403), &m), AppError::Authorization(_)));
        assert!(matches!(classify(&http(404), &m), AppError::NotFound(_)));
        assert!(matches!(classify(&http(409), &m), AppError::Validation(_)));
        assert!(matches!(classify(&http(500), &m), AppError::ServerError(_)));
        assert!(matches!(classify(&http(503), &m), AppError::ServerError(_)));
        assert!(matches!(classify(&http(599), &m), AppError::ServerError(_)));
    }

    #[test]
    fn test_unmapped_status_is_unknown() {
        let err = classify(&http(418), &defaults());
        assert_eq!(
            err,
            AppError::Unknown("An unexpected error occurred (HTTP 418)".to_string())
        );
    }

    #[test]
    fn test_connectivity_failures_are_network() {
        let m = defaults();
        assert_eq!(
            classify(&TransportFailure::Timeout, &m),
            AppError::Network(TIMEOUT.to_string())
        );
        assert_eq!(
            classify(&TransportFailure::UnresolvedHost, &m),
            AppError::Network(UNRESOLVED_HOST.to_string())
        );
        assert_eq!(
            classify(&TransportFailure::Io("reset".to_string()), &m),
            AppError::Network(NETWORK_ERROR.to_string())
        );
    }

    #[test]
    fn test_decode_and_other_are_unknown() {
        let m = defaults();
        assert!(matches!(
            classify(&TransportFailure::Decode("eof".to_string()), &m),
            AppError::Unknown(_)
        ));
        assert_eq!(
            classify(&TransportFailure::Other(String::new()), &m),
            AppError::Unknown("An unknown error occurred".to_string())
        );
    }

    #[test]
    fn test_overrides_change_message_not_variant() {
        let m = ErrorMessages::new()
            .unauthorized("Invalid credentials")
            .forbidden("No feed for you")
            .not_found("User not found")
            .conflict("User already exists");

        assert_eq!(
            classify(&http(401), &m),
            AppError::Authentication("Invalid credentials".to_string())
        );
        assert_eq!(
            classify(&http(403), &m),
            AppError::Authorization("No feed for you".to_string())
        );
        assert_eq!(
            classify(&http(404), &m),
            AppError::NotFound("User not found".to_string())
        );
        assert_eq!(
            classify(&http(409), &m),
            AppError::Validation("User already exists".to_string())
        );
    }

    #[test]
    fn test_validation_message_from_error_body() {
        let body = r#"{"timestamp":"2024-01-01T00:00:00","status":400,"error":"Bad Request","message":"Username is taken","path":"/api/users"}"#;
        let err = classify(
            &TransportFailure::Http {
                status: 400,
                body: Some(body.to_string()),
            },
            &defaults(),
        );
        assert_eq!(err, AppError::Validation("Username is taken".to_string()));
    }

    #[test]
    fn test_validation_message_fallbacks() {
        assert_eq!(validation_message(None), INVALID_REQUEST);
        assert_eq!(validation_message(Some("   ")), INVALID_REQUEST);
        assert_eq!(validation_message(Some("content too long")), "content too long");
        assert_eq!(validation_message(Some(r#"{"status":400}"#)), INVALID_REQUEST);
        assert_eq!(validation_message(Some(r#"{"message":"  "}"#)), INVALID_REQUEST);
    }

    proptest! {
        #[test]
        fn prop_every_status_classifies(status in 100u16..600, body in proptest::option::of(".*")) {
            let err = classify(&TransportFailure::Http { status, body }, &defaults());
            prop_assert!(!err.message().is_empty());

            let expected = match status {
                400 | 409 => "validation",
                401 => "authentication",
                403 => "authorization",
                404 => "not_found",
                500..=599 => "server_error",
                _ => "unknown",
            };
            prop_assert_eq!(err.kind(), expected);
        }

        #[test]
        fn prop_io_detail_never_leaks(detail in ".*") {
            let err = classify(&TransportFailure::Io(detail), &defaults());
            prop_assert_eq!(err, AppError::Network(NETWORK_ERROR.to_string()));
        }
    }
}
