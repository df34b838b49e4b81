//! Authentication session state
//!
//! [`TokenStore`] is shared between the auth repository (which writes it)
//! and [`crate::transport::HttpTransport`] (which reads the bearer token).

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// Lifetime assumed when the backend omits `expiresIn`
pub const DEFAULT_TOKEN_LIFETIME_MILLIS: u64 = 60 * 60 * 1000; // 1 hour

/// Tokens issued by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

/// In-memory token holder
#[derive(Debug, Default)]
pub struct TokenStore {
    session: RwLock<Option<Session>>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a previously persisted session.
    pub fn with_session(session: Option<Session>) -> Self {
        Self {
            session: RwLock::new(session),
        }
    }

    /// Store new tokens. `expires_in_millis` counts from now.
    pub async fn save(&self, access_token: String, refresh_token: String, expires_in_millis: u64) {
        let lifetime = Duration::milliseconds(i64::try_from(expires_in_millis).unwrap_or(i64::MAX));
        let expires_at = Utc::now()
            .checked_add_signed(lifetime)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        *self.session.write().await = Some(Session {
            access_token,
            refresh_token,
            expires_at,
        });
        log::info!("Stored new session (expires {expires_at})");
    }

    pub async fn access_token(&self) -> Option<String> {
        self.session
            .read()
            .await
            .as_ref()
            .map(|s| s.access_token.clone())
    }

    pub async fn refresh_token(&self) -> Option<String> {
        self.session
            .read()
            .await
            .as_ref()
            .map(|s| s.refresh_token.clone())
    }

    /// True when an access token is present and not yet expired.
    pub async fn is_access_token_valid(&self) -> bool {
        self.session
            .read()
            .await
            .as_ref()
            .is_some_and(|s| !s.access_token.is_empty() && !s.is_expired())
    }

    /// Snapshot of the current session, for persisting.
    pub async fn session(&self) -> Option<Session> {
        self.session.read().await.clone()
    }

    pub async fn clear(&self) {
        if self.session.write().await.take().is_some() {
            log::info!("Cleared session");
        }
    }
}
