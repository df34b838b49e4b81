//! Comment DTOs

use serde::{Deserialize, Serialize};

use super::{optional_timestamp, timestamp_or_epoch};
use crate::models::{Comment, CommentAuthor};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: i64,
    pub post_id: i64,
    pub user_id: i64,
    pub username: String,

    #[serde(default)]
    pub user_avatar_url: Option<String>,

    pub content: String,
    pub created_at: String,

    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub post_id: i64,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateCommentRequest {
    pub content: String,
}

impl From<CommentDto> for Comment {
    fn from(dto: CommentDto) -> Self {
        Comment {
            id: dto.id,
            post_id: dto.post_id,
            author: CommentAuthor {
                id: dto.user_id,
                username: dto.username,
                avatar_url: dto.user_avatar_url,
            },
            content: dto.content,
            created_at: timestamp_or_epoch(&dto.created_at),
            updated_at: optional_timestamp(dto.updated_at.as_deref()),
        }
    }
}
