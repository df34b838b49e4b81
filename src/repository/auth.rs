//! Registration, login and token lifecycle

use std::sync::Arc;

use chrono::Utc;

use crate::api::{LoginRequest, LoginResponse, RefreshTokenRequest, RefreshTokenResponse, RegisterRequest};
use crate::classify::ErrorMessages;
use crate::error::{AppError, Result};
use crate::models::{LoginResult, User};
use crate::session::{DEFAULT_TOKEN_LIFETIME_MILLIS, TokenStore};
use crate::transport::{ApiRequest, Transport};

use super::support::{Endpoint, require_email, require_text};

pub const NO_REFRESH_TOKEN: &str = "No refresh token available";

pub struct AuthRepository {
    endpoint: Endpoint,
    tokens: Arc<TokenStore>,
}

impl AuthRepository {
    pub fn new(transport: Arc<dyn Transport>, tokens: Arc<TokenStore>) -> Self {
        let messages = ErrorMessages::new()
            .unauthorized("Invalid credentials")
            .not_found("Resource not found")
            .conflict("Email or username already exists");
        Self {
            endpoint: Endpoint::new(transport, messages, "auth"),
            tokens,
        }
    }

    pub fn tokens(&self) -> &Arc<TokenStore> {
        &self.tokens
    }

    /// Create an account. The backend signs the new user in immediately.
    pub async fn register(&self, email: &str, username: &str, password: &str) -> Result<User> {
        let body = RegisterRequest {
            email: require_email(email)?,
            username: require_text(username, "Username cannot be empty")?,
            password: require_password(password)?,
        };

        let response: LoginResponse = self
            .endpoint
            .fetch(ApiRequest::post("auth/register").json(&body)?)
            .await?;
        self.store_tokens(&response).await;
        Ok(user_from_login(response))
    }

    /// Sign in with an email address or a username.
    ///
    /// Identifiers containing `@` must be well-formed email addresses.
    pub async fn login(&self, email_or_username: &str, password: &str) -> Result<LoginResult> {
        let identifier = if email_or_username.contains('@') {
            require_email(email_or_username)?
        } else {
            require_text(email_or_username, "Email or username cannot be empty")?
        };
        let body = LoginRequest {
            email_or_username: identifier,
            password: require_password(password)?,
        };

        let response: LoginResponse = self
            .endpoint
            .fetch(ApiRequest::post("auth/login").json(&body)?)
            .await?;
        self.store_tokens(&response).await;

        Ok(LoginResult {
            role: response.role.clone(),
            access_token: response.access_token.clone(),
            refresh_token: response.refresh_token.clone(),
            user: user_from_login(response),
        })
    }

    /// Exchange the stored refresh token for a new access token.
    ///
    /// The refresh token is kept on success. Any failure signs the user out.
    pub async fn refresh_token(&self) -> Result<()> {
        let Some(refresh_token) = self.tokens.refresh_token().await else {
            return Err(AppError::Authentication(NO_REFRESH_TOKEN.to_string()));
        };

        let request = ApiRequest::post("auth/refresh").json(&RefreshTokenRequest {
            refresh_token: refresh_token.clone(),
        })?;

        match self.endpoint.fetch::<RefreshTokenResponse>(request).await {
            Ok(response) => {
                let lifetime = response.expires_in.unwrap_or(DEFAULT_TOKEN_LIFETIME_MILLIS);
                self.tokens
                    .save(response.access_token, refresh_token, lifetime)
                    .await;
                Ok(())
            }
            Err(err) => {
                self.tokens.clear().await;
                Err(err)
            }
        }
    }

    pub async fn logout(&self) -> Result<()> {
        self.tokens.clear().await;
        Ok(())
    }

    /// True when a valid, unexpired access token is held.
    pub async fn is_authenticated(&self) -> bool {
        self.tokens.is_access_token_valid().await
    }

    async fn store_tokens(&self, response: &LoginResponse) {
        self.tokens
            .save(
                response.access_token.clone(),
                response.refresh_token.clone(),
                response.expires_in.unwrap_or(DEFAULT_TOKEN_LIFETIME_MILLIS),
            )
            .await;
    }
}

fn require_password(password: &str) -> Result<String> {
    if password.trim().is_empty() {
        return Err(AppError::Validation("Password cannot be empty".to_string()));
    }
    // Passwords are sent verbatim
    Ok(password.to_string())
}

// Login responses carry only identity fields; the rest stays empty.
fn user_from_login(response: LoginResponse) -> User {
    User {
        id: response.user_id,
        email: response.email,
        username: response.username,
        name: String::new(),
        bio: String::new(),
        avatar_url: None,
        location: String::new(),
        website: None,
        created_at: Utc::now().naive_utc(),
        updated_at: None,
    }
}
