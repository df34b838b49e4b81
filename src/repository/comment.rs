//! Comments on posts

use std::sync::Arc;

use crate::api::{CommentDto, CreateCommentRequest, PageDto, UpdateCommentRequest};
use crate::classify::ErrorMessages;
use crate::error::Result;
use crate::models::{Comment, PagedData};
use crate::transport::{ApiRequest, Transport};

use super::support::{Endpoint, require_text};

pub const EMPTY_COMMENT: &str = "Comment content cannot be empty";

pub struct CommentRepository {
    endpoint: Endpoint,
}

impl CommentRepository {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        let messages = ErrorMessages::new()
            .forbidden("You don't have permission to perform this action")
            .not_found("Comment not found")
            .conflict("Comment conflict");
        Self {
            endpoint: Endpoint::new(transport, messages, "comment"),
        }
    }

    pub async fn create_comment(&self, post_id: i64, content: &str) -> Result<Comment> {
        let body = CreateCommentRequest {
            post_id,
            content: require_text(content, EMPTY_COMMENT)?,
        };
        let dto: CommentDto = self
            .endpoint
            .fetch(ApiRequest::post("comments").json(&body)?)
            .await?;
        Ok(Comment::from(dto))
    }

    pub async fn update_comment(&self, id: i64, content: &str) -> Result<Comment> {
        let body = UpdateCommentRequest {
            content: require_text(content, EMPTY_COMMENT)?,
        };
        let dto: CommentDto = self
            .endpoint
            .fetch(ApiRequest::put(format!("comments/{id}")).json(&body)?)
            .await?;
        Ok(Comment::from(dto))
    }

    pub async fn delete_comment(&self, id: i64) -> Result<()> {
        self.endpoint.send(ApiRequest::delete(format!("comments/{id}"))).await
    }

    pub async fn post_comments(&self, post_id: i64, page: u32, size: u32) -> Result<PagedData<Comment>> {
        let dto: PageDto<CommentDto> = self
            .endpoint
            .fetch(ApiRequest::get(format!("comments/post/{post_id}")).page(page, size))
            .await?;
        Ok(dto.into_domain(Comment::from))
    }
}
