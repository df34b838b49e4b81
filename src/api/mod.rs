//! Wire-format DTOs for the AgroHub backend and their domain mappings
//!
//! Every `From<Dto>` conversion here is total: malformed timestamps fall
//! back to the Unix epoch and unknown enum values map to an `Unknown` case.

mod auth;
mod comment;
mod error;
mod follow;
mod like;
mod notification;
mod page;
mod post;
mod user;
mod weather;

use chrono::{DateTime, NaiveDateTime};

pub use auth::{
    LoginRequest, LoginResponse, RefreshTokenRequest, RefreshTokenResponse, RegisterRequest,
};
pub use comment::{CommentDto, CreateCommentRequest, UpdateCommentRequest};
pub use error::ErrorResponse;
pub use follow::{FollowStatsDto, FollowStatusDto};
pub use like::{BatchLikeCountRequest, BatchLikeCountResponse, LikeCountDto, LikeStatusDto};
pub use notification::NotificationDto;
pub use page::{PageDto, PageableDto};
pub use post::{FeedPostDto, PostDto, PostRequest};
pub use user::UserProfileDto;
pub use weather::WeatherResponseDto;

/// Parse a backend timestamp.
///
/// Accepts RFC 3339 (keeping the local wall time) and zone-less ISO 8601.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(zoned) = DateTime::parse_from_rfc3339(value) {
        return Some(zoned.naive_local());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
}

/// Like [`parse_timestamp`], falling back to the Unix epoch.
pub(crate) fn timestamp_or_epoch(value: &str) -> NaiveDateTime {
    parse_timestamp(value).unwrap_or_default()
}

pub(crate) fn optional_timestamp(value: Option<&str>) -> Option<NaiveDateTime> {
    value.and_then(parse_timestamp)
}
