//! User profiles with a per-id cache

use std::sync::Arc;

use crate::api::{PageDto, UserProfileDto};
use crate::cache::{BoundedTtlCache, CacheCapacity, CacheTtl};
use crate::classify::ErrorMessages;
use crate::error::Result;
use crate::models::{PagedData, ProfileInput, User};
use crate::transport::{ApiRequest, Transport};

use super::support::{Endpoint, cache_aside, require_text};

pub struct UserRepository {
    endpoint: Endpoint,
    cache: Arc<BoundedTtlCache<i64, User>>,
}

impl UserRepository {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        let cache = BoundedTtlCache::new(CacheCapacity::USERS, CacheTtl::USERS);
        Self::with_cache(transport, Arc::new(cache))
    }

    pub fn with_cache(transport: Arc<dyn Transport>, cache: Arc<BoundedTtlCache<i64, User>>) -> Self {
        let messages = ErrorMessages::new()
            .forbidden("Access denied")
            .not_found("User not found")
            .conflict("User already exists");
        Self {
            endpoint: Endpoint::new(transport, messages, "user"),
            cache,
        }
    }

    pub fn cache(&self) -> &BoundedTtlCache<i64, User> {
        &self.cache
    }

    /// Create the caller's profile and cache it under the new id.
    pub async fn create_profile(&self, input: ProfileInput) -> Result<User> {
        let request = ApiRequest::post("users").json(&input)?;
        let user = self.fetch_user(request).await?;
        self.cache.put(user.id, user.clone());
        Ok(user)
    }

    /// Update a profile; the cached entry is replaced with the response.
    pub async fn update_profile(&self, id: i64, input: ProfileInput) -> Result<User> {
        let request = ApiRequest::put(format!("users/{id}")).json(&input)?;
        let user = self.fetch_user(request).await?;
        self.cache.replace(id, user.clone());
        Ok(user)
    }

    /// The signed-in user. Always fetched; the result is cached by id.
    pub async fn current_user(&self) -> Result<User> {
        let user = self.fetch_user(ApiRequest::get("users/me")).await?;
        self.cache.put(user.id, user.clone());
        Ok(user)
    }

    pub async fn user_by_id(&self, id: i64) -> Result<User> {
        cache_aside(&self.cache, id, || {
            self.fetch_user(ApiRequest::get(format!("users/{id}")))
        })
        .await
    }

    pub async fn user_by_username(&self, username: &str) -> Result<User> {
        let username = require_text(username, "Username cannot be empty")?;
        let user = self
            .fetch_user(ApiRequest::get("users/username").segment(username))
            .await?;
        self.cache.put(user.id, user.clone());
        Ok(user)
    }

    /// Search users by name or username. Every hit is cached by id.
    pub async fn search_users(&self, query: &str, page: u32, size: u32) -> Result<PagedData<User>> {
        let query = require_text(query, "Search query cannot be empty")?;
        let dto: PageDto<UserProfileDto> = self
            .endpoint
            .fetch(ApiRequest::get("users/search").query("query", query).page(page, size))
            .await?;

        let data = dto.into_domain(User::from);
        for user in &data.items {
            self.cache.put(user.id, user.clone());
        }
        Ok(data)
    }

    async fn fetch_user(&self, request: ApiRequest) -> Result<User> {
        let dto: UserProfileDto = self.endpoint.fetch(request).await?;
        Ok(User::from(dto))
    }
}
