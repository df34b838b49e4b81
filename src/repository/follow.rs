//! Follow relationships and follower lists

use std::sync::Arc;

use crate::api::{FollowStatsDto, FollowStatusDto, PageDto, UserProfileDto};
use crate::classify::ErrorMessages;
use crate::error::Result;
use crate::models::{FollowStats, PagedData, User};
use crate::transport::{ApiRequest, Transport};

use super::support::Endpoint;

pub struct FollowRepository {
    endpoint: Endpoint,
}

impl FollowRepository {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        let messages = ErrorMessages::new()
            .forbidden("Access denied")
            .not_found("User not found")
            .conflict("Follow relationship already exists or doesn't exist");
        Self {
            endpoint: Endpoint::new(transport, messages, "follow"),
        }
    }

    pub async fn follow_user(&self, user_id: i64) -> Result<()> {
        self.endpoint.send(ApiRequest::post(format!("follows/{user_id}"))).await
    }

    pub async fn unfollow_user(&self, user_id: i64) -> Result<()> {
        self.endpoint.send(ApiRequest::delete(format!("follows/{user_id}"))).await
    }

    /// Whether the current user follows `user_id`.
    pub async fn follow_status(&self, user_id: i64) -> Result<bool> {
        let dto: FollowStatusDto = self
            .endpoint
            .fetch(ApiRequest::get(format!("follows/check/{user_id}")))
            .await?;
        Ok(dto.is_following)
    }

    pub async fn follow_stats(&self, user_id: i64) -> Result<FollowStats> {
        let dto: FollowStatsDto = self
            .endpoint
            .fetch(ApiRequest::get(format!("follows/{user_id}/stats")))
            .await?;
        Ok(FollowStats::from(dto))
    }

    pub async fn followers(&self, user_id: i64, page: u32, size: u32) -> Result<PagedData<User>> {
        self.user_page(format!("follows/{user_id}/followers"), page, size).await
    }

    pub async fn following(&self, user_id: i64, page: u32, size: u32) -> Result<PagedData<User>> {
        self.user_page(format!("follows/{user_id}/following"), page, size).await
    }

    async fn user_page(&self, path: String, page: u32, size: u32) -> Result<PagedData<User>> {
        let dto: PageDto<UserProfileDto> = self
            .endpoint
            .fetch(ApiRequest::get(path).page(page, size))
            .await?;
        Ok(dto.into_domain(User::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;

    use crate::error::AppError;
    use crate::repository::fixtures::*;
    use crate::transport::ApiResponse;
    use crate::transport::mock::MockTransport;

    #[tokio::test]
    async fn test_follow_flow() {
        let mock = MockTransport::new()
            .with_response(Method::POST, "follows/9", Ok(ApiResponse::new(201, "")))
            .await
            .with_json(Method::GET, "follows/check/9", r#"{"isFollowing":true}"#)
            .await
            .with_json(
                Method::GET,
                "follows/9/stats",
                r#"{"followersCount":10,"followingCount":2}"#,
            )
            .await;
        let repo = FollowRepository::new(Arc::new(mock));

        repo.follow_user(9).await.unwrap();
        assert!(repo.follow_status(9).await.unwrap());
        assert_eq!(
            repo.follow_stats(9).await.unwrap(),
            FollowStats {
                followers_count: 10,
                following_count: 2
            }
        );
    }

    #[tokio::test]
    async fn test_followers_and_following_pages() {
        let mock = MockTransport::new()
            .with_json(
                Method::GET,
                "follows/9/followers",
                &page_json(vec![user_json(1, "ana"), user_json(2, "bo")], 0, 20, 2),
            )
            .await
            .with_json(Method::GET, "follows/9/following", &page_json(vec![], 0, 20, 0))
            .await;
        let repo = FollowRepository::new(Arc::new(mock));

        assert_eq!(repo.followers(9, 0, 20).await.unwrap().items.len(), 2);
        assert!(repo.following(9, 0, 20).await.unwrap().items.is_empty());
    }

    #[tokio::test]
    async fn test_follow_conflict_message() {
        let mock = MockTransport::new()
            .with_status(Method::DELETE, "follows/9", 409)
            .await;
        let repo = FollowRepository::new(Arc::new(mock));

        assert_eq!(
            repo.unfollow_user(9).await.unwrap_err(),
            AppError::Validation("Follow relationship already exists or doesn't exist".to_string())
        );
    }
}
