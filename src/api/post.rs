//! Post and feed DTOs

use serde::{Deserialize, Serialize};

use super::{optional_timestamp, timestamp_or_epoch};
use crate::models::{FeedPost, Post, PostAuthor};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: i64,
    pub user_id: i64,

    #[serde(default)]
    pub content: Option<String>,

    #[serde(default)]
    pub media_url: Option<String>,

    pub created_at: String,

    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Body for creating or updating a post
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRequest {
    pub content: String,
    pub media_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedPostDto {
    pub id: i64,
    pub user_id: i64,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub user_avatar_url: Option<String>,

    #[serde(default)]
    pub content: Option<String>,

    #[serde(default)]
    pub media_url: Option<String>,

    #[serde(default)]
    pub like_count: u32,

    #[serde(default)]
    pub comment_count: u32,

    #[serde(default)]
    pub liked_by_current_user: bool,

    pub created_at: String,

    #[serde(default)]
    pub updated_at: Option<String>,
}

impl From<PostDto> for Post {
    fn from(dto: PostDto) -> Self {
        Post {
            id: dto.id,
            user_id: dto.user_id,
            content: dto.content.unwrap_or_default(),
            media_url: dto.media_url,
            created_at: timestamp_or_epoch(&dto.created_at),
            updated_at: optional_timestamp(dto.updated_at.as_deref()),
        }
    }
}

impl From<FeedPostDto> for FeedPost {
    fn from(dto: FeedPostDto) -> Self {
        FeedPost {
            id: dto.id,
            author: PostAuthor {
                id: dto.user_id,
                username: dto.username.unwrap_or_else(|| "Unknown".to_string()),
                avatar_url: dto.user_avatar_url,
            },
            content: dto.content.unwrap_or_default(),
            media_url: dto.media_url,
            like_count: dto.like_count,
            comment_count: dto.comment_count,
            is_liked_by_current_user: dto.liked_by_current_user,
            created_at: timestamp_or_epoch(&dto.created_at),
            updated_at: optional_timestamp(dto.updated_at.as_deref()),
        }
    }
}
