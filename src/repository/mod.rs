//! Data-access repositories
//!
//! Each repository composes a [`Transport`] with the shared failure
//! classifier; the user and feed repositories also own a
//! [`BoundedTtlCache`]. [`Repositories::from_config`] wires all nine
//! against the configured backends.

mod auth;
mod comment;
mod feed;
mod follow;
mod like;
mod notification;
mod post;
pub mod support;
mod user;
mod weather;

#[cfg(test)]
pub(crate) mod fixtures;

use std::sync::Arc;

use crate::cache::BoundedTtlCache;
use crate::config::Config;
use crate::error::{ConfigError, TransportFailure};
use crate::models::{FeedPost, User};
use crate::session::TokenStore;
use crate::transport::{HttpTransport, Transport};

pub use auth::AuthRepository;
pub use comment::CommentRepository;
pub use feed::{FEED_CACHE_KEY, FeedRepository};
pub use follow::FollowRepository;
pub use like::LikeRepository;
pub use notification::NotificationRepository;
pub use post::PostRepository;
pub use user::UserRepository;
pub use weather::WeatherRepository;

/// Errors building repositories from configuration
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to create HTTP client: {0}")]
    Transport(#[from] TransportFailure),
}

/// All repositories, sharing one backend transport and token store
pub struct Repositories {
    pub auth: AuthRepository,
    pub comments: CommentRepository,
    pub feed: FeedRepository,
    pub follows: FollowRepository,
    pub likes: LikeRepository,
    pub notifications: NotificationRepository,
    pub posts: PostRepository,
    pub users: UserRepository,
    pub weather: WeatherRepository,
}

impl Repositories {
    pub fn from_config(config: &Config, tokens: Arc<TokenStore>) -> Result<Self, SetupError> {
        config.validate()?;

        let backend: Arc<dyn Transport> = Arc::new(
            HttpTransport::new(&config.base_url, config.timeout())?.with_tokens(tokens.clone()),
        );
        let weather: Arc<dyn Transport> =
            Arc::new(HttpTransport::new(&config.weather.base_url, config.timeout())?);

        let (user_capacity, user_ttl) = config.cache.users.limits("users")?;
        let (feed_capacity, feed_ttl) = config.cache.feed.limits("feed")?;

        Ok(Self::with_transports(
            backend,
            weather,
            tokens,
            config.weather.api_key.clone(),
            Arc::new(BoundedTtlCache::new(user_capacity, user_ttl)),
            Arc::new(BoundedTtlCache::new(feed_capacity, feed_ttl)),
        ))
    }

    pub fn with_transports(
        backend: Arc<dyn Transport>,
        weather: Arc<dyn Transport>,
        tokens: Arc<TokenStore>,
        weather_api_key: Option<String>,
        user_cache: Arc<BoundedTtlCache<i64, User>>,
        feed_cache: Arc<BoundedTtlCache<String, Vec<FeedPost>>>,
    ) -> Self {
        Self {
            auth: AuthRepository::new(backend.clone(), tokens),
            comments: CommentRepository::new(backend.clone()),
            feed: FeedRepository::with_cache(backend.clone(), feed_cache),
            follows: FollowRepository::new(backend.clone()),
            likes: LikeRepository::new(backend.clone()),
            notifications: NotificationRepository::new(backend.clone()),
            posts: PostRepository::new(backend.clone()),
            users: UserRepository::with_cache(backend, user_cache),
            weather: WeatherRepository::new(weather, weather_api_key),
        }
    }
}
