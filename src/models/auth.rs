//! Authentication results

use serde::Serialize;

use super::User;

/// Outcome of a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResult {
    pub user: User,
    pub role: String,
    #[serde(skip_serializing)]
    pub access_token: String,
    #[serde(skip_serializing)]
    pub refresh_token: String,
}
