//! Personalized feed with a short-lived cache of the first page

use std::sync::Arc;

use crate::api::{FeedPostDto, PageDto};
use crate::cache::{BoundedTtlCache, CacheCapacity, CacheTtl};
use crate::classify::ErrorMessages;
use crate::error::Result;
use crate::models::{FeedPost, PagedData};
use crate::transport::{ApiRequest, Transport};

use super::support::Endpoint;

/// Cache key for the first feed page
pub const FEED_CACHE_KEY: &str = "current_feed";

pub struct FeedRepository {
    endpoint: Endpoint,
    cache: Arc<BoundedTtlCache<String, Vec<FeedPost>>>,
}

impl FeedRepository {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        let cache = BoundedTtlCache::new(CacheCapacity::FEED, CacheTtl::FEED);
        Self::with_cache(transport, Arc::new(cache))
    }

    pub fn with_cache(
        transport: Arc<dyn Transport>,
        cache: Arc<BoundedTtlCache<String, Vec<FeedPost>>>,
    ) -> Self {
        let messages = ErrorMessages::new()
            .forbidden("You don't have permission to access the feed")
            .not_found("Feed not found");
        Self {
            endpoint: Endpoint::new(transport, messages, "feed"),
            cache,
        }
    }

    /// Fetch one page of the personalized feed.
    ///
    /// Always goes to the backend. A successful page 0 replaces the cached
    /// snapshot; other pages never touch the cache.
    pub async fn personalized_feed(&self, page: u32, size: u32) -> Result<PagedData<FeedPost>> {
        let dto: PageDto<FeedPostDto> = self
            .endpoint
            .fetch(ApiRequest::get("feed").page(page, size))
            .await?;
        let data = dto.into_domain(FeedPost::from);

        if page == 0 {
            self.cache.put(FEED_CACHE_KEY.to_string(), data.items.clone());
        }
        Ok(data)
    }

    /// The cached first page, or empty when absent or expired.
    pub fn cached_snapshot(&self) -> Vec<FeedPost> {
        self.cache.get(FEED_CACHE_KEY).unwrap_or_default()
    }

    pub fn cache(&self) -> &BoundedTtlCache<String, Vec<FeedPost>> {
        &self.cache
    }
}
