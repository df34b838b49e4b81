//! Post likes and like counts

use std::collections::HashMap;
use std::sync::Arc;

use crate::api::{BatchLikeCountRequest, BatchLikeCountResponse, LikeCountDto, LikeStatusDto};
use crate::classify::ErrorMessages;
use crate::error::Result;
use crate::transport::{ApiRequest, Transport};

use super::support::Endpoint;

pub struct LikeRepository {
    endpoint: Endpoint,
}

impl LikeRepository {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        let messages = ErrorMessages::new()
            .forbidden("You don't have permission to perform this action")
            .not_found("Post not found")
            .conflict("Like operation conflict");
        Self {
            endpoint: Endpoint::new(transport, messages, "like"),
        }
    }

    /// Like a post. Idempotent on the backend.
    pub async fn like_post(&self, post_id: i64) -> Result<()> {
        self.endpoint.send(ApiRequest::post(format!("likes/{post_id}"))).await
    }

    /// Remove a like. Idempotent on the backend.
    pub async fn unlike_post(&self, post_id: i64) -> Result<()> {
        self.endpoint.send(ApiRequest::delete(format!("likes/{post_id}"))).await
    }

    /// Whether the current user has liked the post.
    pub async fn like_status(&self, post_id: i64) -> Result<bool> {
        let dto: LikeStatusDto = self
            .endpoint
            .fetch(ApiRequest::get(format!("likes/{post_id}/check")))
            .await?;
        Ok(dto.is_liked)
    }

    pub async fn like_count(&self, post_id: i64) -> Result<u32> {
        let dto: LikeCountDto = self
            .endpoint
            .fetch(ApiRequest::get(format!("likes/{post_id}/count")))
            .await?;
        Ok(dto.count)
    }

    /// Like counts for several posts in one round trip.
    pub async fn batch_like_counts(&self, post_ids: &[i64]) -> Result<HashMap<i64, u32>> {
        if post_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let body = BatchLikeCountRequest {
            post_ids: post_ids.to_vec(),
        };
        let dto: BatchLikeCountResponse = self
            .endpoint
            .fetch(ApiRequest::post("likes/batch/counts").json(&body)?)
            .await?;
        Ok(dto.into_counts())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;

    use crate::error::AppError;
    use crate::transport::ApiResponse;
    use crate::transport::mock::MockTransport;

    #[tokio::test]
    async fn test_like_and_unlike() {
        let mock = MockTransport::new()
            .with_response(Method::POST, "likes/3", Ok(ApiResponse::new(201, "")))
            .await
            .with_response(Method::DELETE, "likes/3", Ok(ApiResponse::new(204, "")))
            .await;
        let repo = LikeRepository::new(Arc::new(mock.clone()));

        repo.like_post(3).await.unwrap();
        repo.like_post(3).await.unwrap();
        repo.unlike_post(3).await.unwrap();

        assert_eq!(mock.calls_to(Method::POST, "likes/3").await, 2);
        assert_eq!(mock.calls_to(Method::DELETE, "likes/3").await, 1);
    }

    #[tokio::test]
    async fn test_status_and_count() {
        let mock = MockTransport::new()
            .with_json(Method::GET, "likes/3/check", r#"{"isLiked":true}"#)
            .await
            .with_json(Method::GET, "likes/3/count", r#"{"count":12}"#)
            .await;
        let repo = LikeRepository::new(Arc::new(mock));

        assert!(repo.like_status(3).await.unwrap());
        assert_eq!(repo.like_count(3).await.unwrap(), 12);
    }

    #[tokio::test]
    async fn test_batch_counts() {
        let mock = MockTransport::new()
            .with_json(
                Method::POST,
                "likes/batch/counts",
                r#"{"counts":{"1":4,"2":0,"bogus":7}}"#,
            )
            .await;
        let repo = LikeRepository::new(Arc::new(mock.clone()));

        let counts = repo.batch_like_counts(&[1, 2]).await.unwrap();

        assert_eq!(counts.len(), 2);
        assert_eq!(counts[&1], 4);
        let body = mock.last_request().await.unwrap().body.unwrap();
        assert_eq!(body["postIds"], serde_json::json!([1, 2]));
    }

    #[tokio::test]
    async fn test_empty_batch_skips_transport() {
        let mock = MockTransport::new();
        let repo = LikeRepository::new(Arc::new(mock.clone()));

        assert!(repo.batch_like_counts(&[]).await.unwrap().is_empty());
        assert_eq!(mock.call_count().await, 0);
    }

    #[tokio::test]
    async fn test_like_conflict_message() {
        let mock = MockTransport::new().with_status(Method::POST, "likes/3", 409).await;
        let repo = LikeRepository::new(Arc::new(mock));

        assert_eq!(
            repo.like_post(3).await.unwrap_err(),
            AppError::Validation("Like operation conflict".to_string())
        );
    }
}
