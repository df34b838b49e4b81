//! Backend error response body

use serde::Deserialize;

/// Error payload returned by the backend on 4xx/5xx responses.
///
/// All fields are optional so partial bodies still parse.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub timestamp: Option<String>,

    #[serde(default)]
    pub status: Option<u16>,

    #[serde(default)]
    pub error: Option<String>,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub path: Option<String>,
}
