//! Post and feed models

use chrono::NaiveDateTime;
use serde::Serialize;

/// A post as returned by the post endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
    pub content: String,
    pub media_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostAuthor {
    pub id: i64,
    pub username: String,
    pub avatar_url: Option<String>,
}

/// A post enriched with author and engagement data, as shown in the feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedPost {
    pub id: i64,
    pub author: PostAuthor,
    pub content: String,
    pub media_url: Option<String>,
    pub like_count: u32,
    pub comment_count: u32,
    pub is_liked_by_current_user: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}
