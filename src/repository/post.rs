//! Posts: create, edit, delete and list

use std::sync::Arc;

use crate::api::{PageDto, PostDto, PostRequest};
use crate::classify::ErrorMessages;
use crate::error::Result;
use crate::models::{PagedData, Post};
use crate::transport::{ApiRequest, Transport};

use super::support::{Endpoint, require_text};

pub const EMPTY_POST: &str = "Post content cannot be empty";

pub struct PostRepository {
    endpoint: Endpoint,
}

impl PostRepository {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        let messages = ErrorMessages::new()
            .forbidden("You don't have permission to perform this action")
            .not_found("Post not found")
            .conflict("Post conflict");
        Self {
            endpoint: Endpoint::new(transport, messages, "post"),
        }
    }

    pub async fn create_post(&self, content: &str, media_url: Option<String>) -> Result<Post> {
        let body = PostRequest {
            content: require_text(content, EMPTY_POST)?,
            media_url,
        };
        let dto: PostDto = self
            .endpoint
            .fetch(ApiRequest::post("posts").json(&body)?)
            .await?;
        Ok(Post::from(dto))
    }

    pub async fn update_post(&self, id: i64, content: &str, media_url: Option<String>) -> Result<Post> {
        let body = PostRequest {
            content: require_text(content, EMPTY_POST)?,
            media_url,
        };
        let dto: PostDto = self
            .endpoint
            .fetch(ApiRequest::put(format!("posts/{id}")).json(&body)?)
            .await?;
        Ok(Post::from(dto))
    }

    pub async fn delete_post(&self, id: i64) -> Result<()> {
        self.endpoint.send(ApiRequest::delete(format!("posts/{id}"))).await
    }

    pub async fn post_by_id(&self, id: i64) -> Result<Post> {
        let dto: PostDto = self.endpoint.fetch(ApiRequest::get(format!("posts/{id}"))).await?;
        Ok(Post::from(dto))
    }

    pub async fn user_posts(&self, user_id: i64, page: u32, size: u32) -> Result<PagedData<Post>> {
        let dto: PageDto<PostDto> = self
            .endpoint
            .fetch(ApiRequest::get(format!("posts/user/{user_id}")).page(page, size))
            .await?;
        Ok(dto.into_domain(Post::from))
    }
}
